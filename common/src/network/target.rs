//! # Probe Target Model
//!
//! Defines what a wait is run against.
//!
//! A [`Target`] is produced by the resolver from a loosely formed address such as
//! `mysql:3306`, `:8080` or `https://example.com`, may then receive overrides from
//! the caller, and is finally validated and consumed by the probe engine.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::WaitError;

/// The schemes a target may be probed with.
///
/// All of them are probed with a bare TCP connect. `http` and `https` only differ
/// in the port they default to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    Tcp,
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Tcp => "tcp",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Well-known port for the scheme, if it has one.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Scheme::Tcp => None,
            Scheme::Http => Some(80),
            Scheme::Https => Some(443),
        }
    }
}

impl FromStr for Scheme {
    type Err = WaitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Scheme::Tcp),
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(WaitError::BadScheme),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status line templates. An empty template is never emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    /// Emitted once before the first attempt.
    pub wait: String,
    /// Emitted after every failed attempt, once pacing is over.
    pub retry: String,
    pub success: String,
    pub timeout: String,
}

/// A resolved probe subject.
///
/// `scheme` keeps the text the address was written with so that an unsupported
/// scheme reaches validation and is rejected there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub scheme: String,
    pub host: String,
    /// Zero means unresolved.
    pub port: u16,
    /// Pacing interval between two dial attempts.
    pub connect_timeout: Duration,
    /// Overall budget of the retry loop. Zero means unbounded.
    pub timeout: Duration,
    pub messages: Messages,
}

impl Target {
    pub fn set_wait_message(&mut self, message: impl Into<String>) {
        self.messages.wait = message.into();
    }

    pub fn set_retry_message(&mut self, message: impl Into<String>) {
        self.messages.retry = message.into();
    }

    pub fn set_success_message(&mut self, message: impl Into<String>) {
        self.messages.success = message.into();
    }

    pub fn set_timeout_message(&mut self, message: impl Into<String>) {
        self.messages.timeout = message.into();
    }

    /// Rebuilds `scheme://host:port`, bracketing IPv6 literals.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    /// Substitutes `{scheme}`, `{host}` and `{port}` in `template`.
    ///
    /// Returns `None` for an empty template. Unknown placeholders are kept as is.
    pub fn render(&self, template: &str) -> Option<String> {
        if template.is_empty() {
            return None;
        }

        let rendered = template
            .replace("{scheme}", &self.scheme)
            .replace("{host}", &self.host)
            .replace("{port}", &self.port.to_string());

        Some(rendered)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

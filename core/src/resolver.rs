//! Turns loosely formed addresses into [`Target`]s.
//!
//! Accepted shapes, in the order they are expanded:
//! * `:port` gets the default host prepended.
//! * Anything without `://` gets the default scheme prepended.
//! * The result is parsed as a URL; a missing port falls back to the scheme's
//!   well-known port, or stays `0` when the scheme has none.

use url::{Host, ParseError, Url};
use waithost_common::Result;
use waithost_common::config::Config;
use waithost_common::network::target::{Messages, Scheme, Target};

const SCHEME_SEPARATOR: &str = "://";

pub struct TargetResolver {
    config: Config,
}

impl TargetResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses `raw` into a target carrying the configured defaults.
    ///
    /// Only a malformed URL fails here. Missing pieces (unknown scheme, port `0`)
    /// are left for [`crate::validator::validate`] to reject.
    pub fn resolve(&self, raw: &str) -> Result<Target> {
        let expanded: String = self.expand(raw);
        let url: Url = match Url::parse(&expanded) {
            Ok(url) => url,
            Err(ParseError::EmptyHost) => return self.hostless(&expanded),
            Err(e) => return Err(e.into()),
        };

        let scheme: String = url.scheme().to_string();
        let port: u16 = url
            .port()
            .or_else(|| default_port(&scheme))
            .unwrap_or(0);

        Ok(self.target(scheme, hostname(&url), port))
    }

    /// `http://` and `tcp://:8080` are refused by the URL parser. They still
    /// resolve, with an empty host, so validation reports them as `BadHost`.
    fn hostless(&self, address: &str) -> Result<Target> {
        let (scheme, rest) = address.split_once(SCHEME_SEPARATOR).unwrap_or(("", address));
        let scheme: String = scheme.to_ascii_lowercase();
        let authority: &str = rest.split(['/', '?', '#']).next().unwrap_or_default();

        let port: u16 = match authority.rsplit_once(':') {
            Some((_, digits)) if !digits.is_empty() => {
                digits.parse().map_err(|_| ParseError::InvalidPort)?
            }
            _ => default_port(&scheme).unwrap_or(0),
        };

        Ok(self.target(scheme, String::new(), port))
    }

    fn target(&self, scheme: String, host: String, port: u16) -> Target {
        Target {
            scheme,
            host,
            port,
            connect_timeout: self.config.default_connect_timeout,
            timeout: self.config.default_timeout,
            messages: Messages {
                retry: self.config.default_retry_message.clone(),
                ..Messages::default()
            },
        }
    }

    fn expand(&self, raw: &str) -> String {
        let mut address: String = raw.to_string();

        if address.starts_with(':') && !address.contains(SCHEME_SEPARATOR) {
            address.insert_str(0, &self.config.default_host);
        }

        if !address.contains(SCHEME_SEPARATOR) {
            address = format!("{}{SCHEME_SEPARATOR}{address}", self.config.default_scheme);
        }

        address
    }
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    scheme.parse::<Scheme>().ok()?.default_port()
}

/// Host without the brackets an IPv6 literal is written with.
fn hostname(url: &Url) -> String {
    match url.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => String::new(),
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

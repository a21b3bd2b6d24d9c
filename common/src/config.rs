use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_SCHEME: &str = "tcp";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_RETRY_MESSAGE: &str = "Waiting for connection on {host}:{port}";

/// Process-wide defaults consulted while resolving a raw address.
///
/// Built once per invocation and handed to the resolver, so resolution stays a
/// pure function of its input and this value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Host used when the address starts with `:port`.
    pub default_host: String,
    /// Scheme used when the address has no `scheme://` prefix.
    pub default_scheme: String,
    /// Overall retry budget. Zero waits forever.
    pub default_timeout: Duration,
    /// Minimum spacing between two dial attempts.
    pub default_connect_timeout: Duration,
    pub default_retry_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_host: DEFAULT_HOST.to_string(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            default_timeout: Duration::ZERO,
            default_connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            default_retry_message: DEFAULT_RETRY_MESSAGE.to_string(),
        }
    }
}

impl Config {
    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }
}

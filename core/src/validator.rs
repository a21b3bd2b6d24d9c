use url::Url;
use waithost_common::config::DEFAULT_CONNECT_TIMEOUT;
use waithost_common::network::target::{Scheme, Target};
use waithost_common::{Result, WaitError};

/// Pre-flight check run right before probing.
///
/// Rejects, first failure wins: an unsupported scheme, an empty host, port `0`,
/// then an address that no longer parses once rebuilt. A zero pacing interval is
/// raised to one second; nothing else on the target is touched.
pub fn validate(target: &mut Target) -> Result<Scheme> {
    let scheme: Scheme = target.scheme.parse()?;

    if target.host.is_empty() {
        return Err(WaitError::BadHost);
    }
    if target.port == 0 {
        return Err(WaitError::BadPort);
    }

    Url::parse(&target.address())?;

    if target.connect_timeout.is_zero() {
        target.connect_timeout = DEFAULT_CONNECT_TIMEOUT;
    }

    Ok(scheme)
}

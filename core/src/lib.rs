//! Resolution, validation and the retry-probe engine behind `wait-host`.
//!
//! A raw address flows through three stages:
//!
//! 1. [`TargetResolver::resolve`] expands and parses it into a [`Target`].
//! 2. The caller may override port, timing or messages on that target.
//! 3. [`ProbeEngine::run`] validates it and dials until it answers or time runs out.
//!
//! [`wait`] chains all of this with the default configuration and sinks.

pub mod network;
pub mod probe;
pub mod resolver;
pub mod validator;

pub use network::tcp::{Dialer, TcpDialer};
pub use probe::ProbeEngine;
pub use resolver::TargetResolver;
pub use waithost_common::network::target::Target;

use waithost_common::Result;
use waithost_common::config::Config;

/// Resolves `raw` and waits for it with the default engine.
pub async fn wait(raw: &str, config: &Config) -> Result<()> {
    let target: Target = TargetResolver::new(config.clone()).resolve(raw)?;
    ProbeEngine::new().run(target).await
}

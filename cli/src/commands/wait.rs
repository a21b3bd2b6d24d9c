use std::time::Duration;

use tracing::error;
use waithost_common::Result;
use waithost_common::config::Config;
use waithost_common::network::target::Target;
use waithost_core::{ProbeEngine, TargetResolver};

use crate::commands::CommandLine;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_TIMEOUT: u8 = 1;
pub const EXIT_FAILURE: u8 = 2;

/// Runs one wait and returns the process exit status.
pub async fn wait(cmd: &CommandLine, cfg: Config) -> u8 {
    let Some(raw) = cmd.address() else {
        error!("no target given, pass an address or --host");
        return EXIT_FAILURE;
    };

    let result: Result<()> = resolve_and_wait(raw, cmd, cfg).await;
    if let Err(e) = &result
        && !e.is_timeout()
    {
        error!(error = %e, "cannot wait for {raw}");
    }

    exit_code(&result)
}

async fn resolve_and_wait(raw: &str, cmd: &CommandLine, cfg: Config) -> Result<()> {
    let mut target: Target = TargetResolver::new(cfg).resolve(raw)?;
    apply_overrides(&mut target, cmd);
    ProbeEngine::new().run(target).await
}

/// Zero and empty values leave the resolved target untouched.
fn apply_overrides(target: &mut Target, cmd: &CommandLine) {
    if cmd.port > 0 {
        target.port = cmd.port;
    }
    if cmd.delay > 0 {
        target.connect_timeout = Duration::from_secs(cmd.delay);
    }
    if cmd.timeout > 0 {
        target.timeout = Duration::from_secs(cmd.timeout);
    }
    if !cmd.message.is_empty() {
        target.set_retry_message(cmd.message.as_str());
    }
    if cmd.quiet {
        target.set_retry_message("");
    }
}

fn exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) if e.is_timeout() => EXIT_TIMEOUT,
        Err(_) => EXIT_FAILURE,
    }
}

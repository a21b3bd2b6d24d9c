mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, wait};
use terminal::logging;
use waithost_common::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let status: u8 = wait::wait(&commands, Config::default()).await;
    Ok(ExitCode::from(status))
}

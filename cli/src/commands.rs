pub mod wait;

use clap::{ArgAction, Parser};
use waithost_common::config::DEFAULT_RETRY_MESSAGE;

const EXAMPLES: &str = "\
Examples:
    wait-host mysql:3306          Wait indefinitely for port 3306 on host mysql
    wait-host http://google.com   Wait indefinitely for port 80 on host google.com
    wait-host mysql:3306 -t 15    Wait at most 15s for port 3306 on host mysql";

#[derive(Parser, Debug)]
#[command(name = "wait-host", version)]
#[command(about = "Wait for host and port availability.")]
#[command(long_about = "Wait for host and port availability.

Useful for synchronizing interdependent services, such as linked containers:
wait for a database to be ready, for a php-fpm socket, ...")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    /// Address under test, e.g. `mysql:3306`, `:8080` or `https://example.com`
    pub target: Option<String>,

    /// Host or IP under test, used when no positional target is given
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// TCP port under test, overrides the one in the address
    #[arg(short, long, default_value_t = 0)]
    pub port: u16,

    /// Delay in seconds between two connection attempts
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Retry message, `{scheme}`, `{host}` and `{port}` are substituted
    #[arg(short, long, default_value = DEFAULT_RETRY_MESSAGE)]
    pub message: String,

    /// Don't output any status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Timeout in seconds, zero for no timeout
    #[arg(short, long, default_value_t = 0)]
    pub timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Positional target first, `--host` otherwise.
    pub fn address(&self) -> Option<&str> {
        self.target
            .as_deref()
            .or(self.host.as_deref())
            .filter(|raw| !raw.is_empty())
    }
}

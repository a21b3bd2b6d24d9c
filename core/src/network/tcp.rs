use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::warn;

/// Network-level deadline of a single connect, independent of pacing.
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// One bounded reachability attempt.
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Returns `Ok(())` once a connection to `host:port` has been opened.
    async fn dial(&self, host: &str, port: u16) -> io::Result<()>;
}

/// Plain TCP connect. The stream is shut down again as soon as it is open.
#[derive(Clone, Copy, Debug)]
pub struct TcpDialer {
    connect_timeout: Duration,
}

impl TcpDialer {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for TcpDialer {
    fn default() -> Self {
        Self::new(DEFAULT_DIAL_TIMEOUT)
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn dial(&self, host: &str, port: u16) -> io::Result<()> {
        let mut stream: TcpStream = match timeout(self.connect_timeout, TcpStream::connect((host, port))).await {
            Ok(connected) => connected?,
            Err(_elapsed) => {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connect to {host}:{port} timed out"),
                ));
            }
        };

        // Reachability is already proven, a failed close does not change that.
        if let Err(e) = stream.shutdown().await {
            warn!(host, port, error = %e, "failed to close probe connection");
        }

        Ok(())
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

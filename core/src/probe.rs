//! The retry loop.
//!
//! ```text
//! Idle ──▶ Probing ──▶ Succeeded
//!            │  ▲
//!            ▼  │ (paced retry)
//!          failed ──▶ TimedOut
//! ```
//!
//! Each iteration first checks the overall budget, then dials once. A failed
//! iteration is stretched to at least `connect_timeout` before the next one, so
//! an unreachable host is never hammered.

use tokio::time::{Duration, Instant, sleep};
use tracing::{debug, info, warn};
use waithost_common::network::target::{Scheme, Target};
use waithost_common::notify::{ConsoleNotifier, Notifier};
use waithost_common::{Result, WaitError};

use crate::network::tcp::{Dialer, TcpDialer};
use crate::validator;

pub struct ProbeEngine<D = TcpDialer> {
    dialer: D,
    notifier: Box<dyn Notifier>,
}

impl ProbeEngine<TcpDialer> {
    pub fn new() -> Self {
        Self {
            dialer: TcpDialer::default(),
            notifier: Box::new(ConsoleNotifier),
        }
    }
}

impl Default for ProbeEngine<TcpDialer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialer> ProbeEngine<D> {
    pub fn with_dialer<E: Dialer>(self, dialer: E) -> ProbeEngine<E> {
        ProbeEngine {
            dialer,
            notifier: self.notifier,
        }
    }

    /// Replaces the sink status lines are written to.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Validates `target` and waits until it accepts a TCP connection.
    ///
    /// Returns [`WaitError::Timeout`] once the overall budget is spent, or the
    /// validation error if the target is incomplete. Nothing is dialed in the
    /// latter case.
    pub async fn run(&self, mut target: Target) -> Result<()> {
        let scheme: Scheme = validator::validate(&mut target)?;
        self.probe(&target, scheme).await
    }

    async fn probe(&self, target: &Target, scheme: Scheme) -> Result<()> {
        let start: Instant = Instant::now();
        info!(%scheme, host = %target.host, port = target.port, "waiting for target");
        self.notify(target, &target.messages.wait);

        let mut attempt: u64 = 0;
        loop {
            if !target.timeout.is_zero() && start.elapsed() >= target.timeout {
                warn!(attempts = attempt, elapsed = ?start.elapsed(), "gave up on {target}");
                self.notify(target, &target.messages.timeout);
                return Err(WaitError::Timeout);
            }

            let iteration: Instant = Instant::now();
            attempt += 1;

            // http and https dial the resolved numeric port like tcp does.
            match self.dialer.dial(&target.host, target.port).await {
                Ok(()) => {
                    info!(attempts = attempt, elapsed = ?start.elapsed(), "{target} is reachable");
                    self.notify(target, &target.messages.success);
                    return Ok(());
                }
                Err(e) => debug!(attempt, error = %e, "connection attempt failed"),
            }

            let spent: Duration = iteration.elapsed();
            if spent < target.connect_timeout {
                sleep(target.connect_timeout - spent).await;
            }

            self.notify(target, &target.messages.retry);
        }
    }

    fn notify(&self, target: &Target, template: &str) {
        let Some(line) = target.render(template) else {
            return;
        };
        if let Err(e) = self.notifier.print(&line) {
            warn!(error = %e, "failed to deliver status message");
        }
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

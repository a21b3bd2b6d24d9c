//! Sinks for the status lines produced while waiting.

use std::io::{self, Write};

/// Receives rendered status lines.
pub trait Notifier: Send + Sync {
    fn print(&self, line: &str) -> io::Result<()>;
}

/// Default sink, one line per message on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn print(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn print(&self, line: &str) -> io::Result<()> {
        (**self).print(line)
    }
}

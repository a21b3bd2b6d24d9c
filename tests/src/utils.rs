use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use waithost_common::notify::Notifier;

pub const LOOPBACK: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// A loopback port nobody listens on right now.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind(SocketAddr::from((LOOPBACK, 0))).unwrap();
    listener.local_addr().unwrap().port()
}

/// Starts accepting on `port` after `delay`, until the handle is aborted.
pub fn spawn_listener(port: u16, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let listener = TcpListener::bind((LOOPBACK, port)).await.unwrap();
        loop {
            let _ = listener.accept().await;
        }
    })
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.lines().iter().filter(|l| l.starts_with(prefix)).count()
    }
}

impl Notifier for Recorder {
    fn print(&self, line: &str) -> io::Result<()> {
        self.0.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

#![cfg(test)]
use std::time::{Duration, Instant};

use waithost_common::ErrorKind;
use waithost_common::config::Config;
use waithost_common::network::target::Target;
use waithost_core::{ProbeEngine, TargetResolver};

use crate::utils::{self, LOOPBACK, Recorder};

fn resolver() -> TargetResolver {
    TargetResolver::new(Config::default().with_default_host(LOOPBACK.to_string()))
}

fn with_messages(mut target: Target) -> Target {
    target.set_wait_message("wait {host}:{port}");
    target.set_retry_message("retry {host}:{port}");
    target.set_success_message("up {scheme}://{host}:{port}");
    target.set_timeout_message("timeout {host}:{port}");
    target
}

/// Every accepted address shape reaches a listener that is already up.
#[tokio::test]
async fn open_port_in_every_address_shape() -> anyhow::Result<()> {
    let port: u16 = utils::free_port();
    let listener = utils::spawn_listener(port, Duration::ZERO);
    tokio::time::sleep(Duration::from_millis(50)).await;

    for raw in [
        format!("tcp://127.0.0.1:{port}"),
        format!("127.0.0.1:{port}"),
        format!(":{port}"),
    ] {
        let mut target: Target = resolver().resolve(&raw)?;
        target.timeout = Duration::from_secs(5);

        let recorder = Recorder::default();
        let engine = ProbeEngine::new().with_notifier(recorder.clone());
        engine.run(with_messages(target)).await?;

        assert_eq!(recorder.count("up tcp://127.0.0.1"), 1, "{raw} did not succeed");
        assert_eq!(recorder.count("timeout"), 0);
    }

    listener.abort();
    Ok(())
}

#[tokio::test]
async fn listener_starting_late_is_awaited() -> anyhow::Result<()> {
    let port: u16 = utils::free_port();
    let listener = utils::spawn_listener(port, Duration::from_secs(2));

    let mut target: Target = resolver().resolve(&format!(":{port}"))?;
    target.connect_timeout = Duration::from_secs(1);
    target.timeout = Duration::from_secs(10);

    let recorder = Recorder::default();
    let engine = ProbeEngine::new().with_notifier(recorder.clone());
    let start = Instant::now();
    engine.run(with_messages(target)).await?;

    assert!(start.elapsed() >= Duration::from_secs(1));
    let retries: usize = recorder.count("retry");
    assert!((2..=3).contains(&retries), "unexpected retry count {retries}");
    assert_eq!(recorder.count("wait"), 1);
    assert_eq!(recorder.lines().last().map(String::as_str), Some(format!("up tcp://127.0.0.1:{port}").as_str()));

    listener.abort();
    Ok(())
}

#[tokio::test]
async fn closed_port_times_out_within_one_interval() -> anyhow::Result<()> {
    let port: u16 = utils::free_port();

    let mut target: Target = resolver().resolve(&format!("127.0.0.1:{port}"))?;
    target.connect_timeout = Duration::from_secs(1);
    target.timeout = Duration::from_secs(2);

    let recorder = Recorder::default();
    let engine = ProbeEngine::new().with_notifier(recorder.clone());
    let start = Instant::now();
    let err = engine.run(with_messages(target)).await.unwrap_err();
    let elapsed: Duration = start.elapsed();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(elapsed >= Duration::from_secs(2), "gave up too early: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "gave up too late: {elapsed:?}");
    assert_eq!(recorder.lines().last().map(String::as_str), Some(format!("timeout 127.0.0.1:{port}").as_str()));
    Ok(())
}

/// http targets dial their numeric port, so an explicit override is honoured.
#[tokio::test]
async fn http_target_dials_overridden_port() -> anyhow::Result<()> {
    let port: u16 = utils::free_port();
    let listener = utils::spawn_listener(port, Duration::ZERO);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let mut target: Target = resolver().resolve("http://127.0.0.1")?;
    assert_eq!(target.port, 80);
    target.port = port;
    target.timeout = Duration::from_secs(5);

    let recorder = Recorder::default();
    ProbeEngine::new()
        .with_notifier(recorder.clone())
        .run(with_messages(target))
        .await?;

    assert_eq!(recorder.count("up http://127.0.0.1"), 1);

    listener.abort();
    Ok(())
}

#[tokio::test]
async fn preflight_errors_stop_before_probing() {
    let recorder = Recorder::default();
    let engine = ProbeEngine::new().with_notifier(recorder.clone());

    let no_port: Target = resolver().resolve("goland.org").unwrap();
    assert_eq!(engine.run(with_messages(no_port)).await.unwrap_err().kind(), ErrorKind::BadPort);

    let unsupported: Target = resolver().resolve("ftp://127.0.0.1:21").unwrap();
    assert_eq!(engine.run(with_messages(unsupported)).await.unwrap_err().kind(), ErrorKind::BadScheme);

    let mut no_host: Target = resolver().resolve(":80").unwrap();
    no_host.host.clear();
    assert_eq!(engine.run(with_messages(no_host)).await.unwrap_err().kind(), ErrorKind::BadHost);

    assert!(recorder.lines().is_empty());
}

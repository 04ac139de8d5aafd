//! Runs a real service against real SIGINT/SIGTERM deliveries.
//!
//! Signals are delivered process-wide, so every test in this binary drives
//! the interrupt path; tests that must never observe a signal live in a
//! separate test binary.

#![cfg(unix)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use nix::sys::signal::{Signal as Sig, raise};
use std::time::Duration;
use svc::{Process, Service};
use tokio::sync::Notify;
use tokio::time::timeout;

#[derive(Default)]
struct WaitingProcess {
    stop: Notify,
    interrupt_error: Option<&'static str>,
}

#[async_trait]
impl Process for WaitingProcess {
    async fn run(&self) -> Result<()> {
        self.stop.notified().await;
        Ok(())
    }

    async fn interrupt(&self) -> Result<()> {
        self.stop.notify_one();
        match self.interrupt_error {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        }
    }
}

fn raise_signal(after: Duration, signal: Sig) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(after);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let _ = raise(signal);
        }
    });
}

#[tokio::test]
async fn test_run_interrupt() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let service = Service::new(WaitingProcess::default()).unwrap();

    raise_signal(Duration::from_millis(200), Sig::SIGINT);
    let outcome = timeout(Duration::from_secs(10), service.run())
        .await
        .unwrap();

    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_run_terminate() {
    let service = Service::new(WaitingProcess::default()).unwrap();

    raise_signal(Duration::from_millis(200), Sig::SIGTERM);
    let outcome = timeout(Duration::from_secs(10), service.run())
        .await
        .unwrap();

    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_run_interrupt_error() {
    let service = Service::with_config(
        WaitingProcess {
            interrupt_error: Some("process interrupt error"),
            ..Default::default()
        },
        svc::ServiceConfig::builder().name("failing").build().unwrap(),
    );

    raise_signal(Duration::from_millis(200), Sig::SIGINT);
    let outcome = timeout(Duration::from_secs(10), service.run())
        .await
        .unwrap();

    assert_eq!(outcome.unwrap_err().to_string(), "process interrupt error");
}

#[tokio::test]
async fn test_run_twice_resubscribes() {
    let service = Service::new(WaitingProcess::default()).unwrap();

    raise_signal(Duration::from_millis(200), Sig::SIGINT);
    let outcome = timeout(Duration::from_secs(10), service.run())
        .await
        .unwrap();
    assert!(outcome.is_ok());

    // the second run registers its own subscription and sees later deliveries
    let outcome = timeout(Duration::from_secs(10), service.run())
        .await
        .unwrap();
    assert!(outcome.is_ok());
}

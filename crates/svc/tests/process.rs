//! Outcomes that must resolve without any termination signal in flight.
//!
//! Kept apart from the signal-raising tests so a process-wide signal can
//! never preempt a run that is expected to end on a process failure.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use svc::{Process, Service, ServiceConfig};
use tokio::time::timeout;

struct FailingProcess {
    interrupts: Arc<AtomicUsize>,
}

#[async_trait]
impl Process for FailingProcess {
    async fn run(&self) -> Result<()> {
        Err(anyhow!("process run error"))
    }

    async fn interrupt(&self) -> Result<()> {
        self.interrupts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn test_run_returns_process_error_without_interrupting() {
    let _ = tracing_subscriber::fmt().try_init();

    let interrupts = Arc::new(AtomicUsize::new(0));
    let service = Service::new(FailingProcess {
        interrupts: interrupts.clone(),
    })
    .unwrap();

    let outcome = timeout(Duration::from_secs(5), service.run())
        .await
        .unwrap();

    assert_eq!(outcome.unwrap_err().to_string(), "process run error");
    assert_eq!(interrupts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_default_configuration_describes_current_binary() {
    let current = std::env::current_exe().unwrap();
    let name = current.file_name().unwrap().to_string_lossy().into_owned();

    let service = Service::new(FailingProcess {
        interrupts: Arc::new(AtomicUsize::new(0)),
    })
    .unwrap();

    assert_eq!(service.name(), name);
    assert_eq!(
        service.description(),
        format!("Process {name} wrapped using the tiny svc library by Purple Clay")
    );
    assert_eq!(service.executables().len(), 1);
    assert_eq!(service.executables()[0].directory, current.parent().unwrap());
}

#[tokio::test]
async fn test_configured_service_reports_its_options() {
    let config = ServiceConfig::builder()
        .name("worker")
        .description("wraps the nightly batch worker")
        .executables(["/usr/local/bin/worker --queue=nightly"])
        .build()
        .unwrap();

    let service = Service::with_config(
        FailingProcess {
            interrupts: Arc::new(AtomicUsize::new(0)),
        },
        config,
    );

    assert_eq!(service.name(), "worker");
    assert_eq!(service.description(), "wraps the nightly batch worker");
    assert_eq!(service.executables()[0].exec, "worker");
    assert_eq!(service.executables()[0].arguments, vec!["--queue=nightly"]);
}

//! Wraps a minimal worker as a service. Run it, then press Ctrl-C (or send
//! SIGTERM) to stop it gracefully.

use anyhow::Result;
use async_trait::async_trait;
use svc::{Process, Service, ServiceConfig};
use tokio::sync::Notify;
use tracing::info;

struct Worker {
    shutdown: Notify,
}

#[async_trait]
impl Process for Worker {
    async fn run(&self) -> Result<()> {
        info!("worker started, waiting for a stop request");
        self.shutdown.notified().await;
        info!("worker stopping");
        Ok(())
    }

    async fn interrupt(&self) -> Result<()> {
        self.shutdown.notify_one();
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::builder().name("wrapped-worker").build()?;
    let service = Service::with_config(
        Worker {
            shutdown: Notify::new(),
        },
        config,
    );

    info!(
        name = service.name(),
        description = service.description(),
        "service configured"
    );
    service.run().await
}

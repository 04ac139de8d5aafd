use crate::factory::PlatformTerminationSignalsFactory;
use anyhow::Result;
use std::sync::Arc;
use svc_core::{Executable, Lifecycle, Process, ServiceConfig, SvcError, TerminationSignalsFactory};
use tracing::info;

/// Wraps a caller-supplied process so it can be managed uniformly as a
/// background service: started by a service manager and cleanly stopped when
/// a termination request arrives.
pub struct Service {
    proc: Arc<dyn Process>,
    config: ServiceConfig,
}

impl Service {
    /// Wraps a process with a default configuration. The executable, name and
    /// description are all resolved from the currently running binary; fails
    /// if that binary's path cannot be determined.
    pub fn new(proc: impl Process + 'static) -> Result<Self, SvcError> {
        Ok(Self::with_config(proc, ServiceConfig::builder().build()?))
    }

    /// Wraps a process with an explicitly built configuration.
    pub fn with_config(proc: impl Process + 'static, config: ServiceConfig) -> Self {
        Self {
            proc: Arc::new(proc),
            config,
        }
    }

    /// Friendly name of the service.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Description used when building the service definition during
    /// installation.
    pub fn description(&self) -> &str {
        &self.config.description
    }

    /// The executables wrapped by the service, in the order configured.
    pub fn executables(&self) -> &[Executable] {
        &self.config.executables
    }

    /// Runs the wrapped process, blocking until either it fails or a
    /// termination signal triggers a graceful interrupt, and returns the
    /// single outcome of the run.
    ///
    /// Every invocation registers a fresh signal subscription and releases it
    /// before returning, so the service can be run again after a completed
    /// run.
    pub async fn run(&self) -> Result<()> {
        let signals = PlatformTerminationSignalsFactory::subscribe()
            .map_err(SvcError::SignalSubscription)?;
        info!(service = %self.config.name, "running wrapped process");

        Lifecycle::new(Arc::clone(&self.proc), signals).run().await
    }
}

use anyhow::Result;
use async_trait::async_trait;

/// Contract any wrapped program must satisfy to be managed as a service.
///
/// The lifecycle coordinator depends only on this trait, never on a concrete
/// process implementation.
#[async_trait]
pub trait Process: Send + Sync {
    /// Entry point of the wrapped program. Invoked once per run and expected
    /// to block until the work completes or fails. The returned error is
    /// relayed verbatim as the outcome of the run.
    async fn run(&self) -> Result<()>;

    /// Graceful-stop request, invoked at most once per run when a termination
    /// signal arrives. Expected to cause [`run`](Process::run) to return
    /// promptly if it is still blocked.
    async fn interrupt(&self) -> Result<()>;
}

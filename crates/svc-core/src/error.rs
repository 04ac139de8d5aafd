use thiserror::Error;

/// Errors raised by the service layer itself, as opposed to failures
/// relayed verbatim from the wrapped process.
#[derive(Error, Debug)]
pub enum SvcError {
    /// The path of the currently running binary could not be resolved while
    /// synthesizing the default executable descriptor.
    #[error("failed to resolve the current executable: {0}")]
    CurrentExecutable(#[source] std::io::Error),

    /// The OS refused the termination signal subscription.
    #[error("failed to subscribe to termination signals: {0}")]
    SignalSubscription(#[source] std::io::Error),
}

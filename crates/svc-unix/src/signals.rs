#[cfg(unix)]
mod unix_impl {
    use async_trait::async_trait;
    use std::io;
    use svc_core::{Termination, TerminationSignals};
    use tokio::signal::unix::{Signal, SignalKind, signal};
    use tracing::debug;

    /// Subscription to SIGINT and SIGTERM backed by the tokio signal driver.
    pub struct UnixTerminationSignals {
        interrupt: Signal,
        terminate: Signal,
    }

    impl UnixTerminationSignals {
        /// Registers interest in SIGINT and SIGTERM. The driver buffers
        /// signals delivered from this point on, so a signal raised before
        /// anybody waits in [`recv`](TerminationSignals::recv) is not lost.
        ///
        /// Dropping the subscription releases the registration.
        pub fn subscribe() -> io::Result<Self> {
            let interrupt = signal(SignalKind::interrupt())?;
            let terminate = signal(SignalKind::terminate())?;
            debug!("subscribed to SIGINT and SIGTERM");

            Ok(Self {
                interrupt,
                terminate,
            })
        }
    }

    #[async_trait]
    impl TerminationSignals for UnixTerminationSignals {
        async fn recv(&mut self) -> Termination {
            tokio::select! {
                Some(_) = self.interrupt.recv() => Termination::Interrupt,
                Some(_) = self.terminate.recv() => Termination::Terminate,
                // both streams have ended; no signal can be observed any more
                else => std::future::pending::<Termination>().await,
            }
        }
    }
}

#[cfg(unix)]
pub use unix_impl::UnixTerminationSignals;

// Provide a stub for non-Unix systems so the crate always compiles
#[cfg(not(unix))]
pub struct UnixTerminationSignals;

#[cfg(not(unix))]
impl UnixTerminationSignals {
    pub fn subscribe() -> std::io::Result<Self> {
        Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
    }
}

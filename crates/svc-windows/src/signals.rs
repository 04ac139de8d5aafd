#[cfg(windows)]
mod windows_impl {
    use async_trait::async_trait;
    use std::io;
    use svc_core::{Termination, TerminationSignals};
    use tokio::signal::windows::{CtrlC, CtrlShutdown, ctrl_c, ctrl_shutdown};
    use tracing::debug;

    /// Subscription to the Ctrl-C and console shutdown events, the Windows
    /// equivalents of the two conventional termination signals.
    pub struct WindowsTerminationSignals {
        interrupt: CtrlC,
        shutdown: CtrlShutdown,
    }

    impl WindowsTerminationSignals {
        /// Registers the console control handlers. Events delivered from this
        /// point on are buffered, so one raised before anybody waits in
        /// [`recv`](TerminationSignals::recv) is not lost.
        ///
        /// Dropping the subscription releases the registration.
        pub fn subscribe() -> io::Result<Self> {
            let interrupt = ctrl_c()?;
            let shutdown = ctrl_shutdown()?;
            debug!("subscribed to Ctrl-C and console shutdown events");

            Ok(Self {
                interrupt,
                shutdown,
            })
        }
    }

    #[async_trait]
    impl TerminationSignals for WindowsTerminationSignals {
        async fn recv(&mut self) -> Termination {
            tokio::select! {
                Some(_) = self.interrupt.recv() => Termination::Interrupt,
                Some(_) = self.shutdown.recv() => Termination::Terminate,
                // both streams have ended; no event can be observed any more
                else => std::future::pending::<Termination>().await,
            }
        }
    }
}

#[cfg(windows)]
pub use windows_impl::WindowsTerminationSignals;

// Provide a stub for non-Windows systems so the crate always compiles
#[cfg(not(windows))]
pub struct WindowsTerminationSignals;

#[cfg(not(windows))]
impl WindowsTerminationSignals {
    pub fn subscribe() -> std::io::Result<Self> {
        Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
    }
}

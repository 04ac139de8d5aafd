use async_trait::async_trait;
use std::io;

/// Which conventional termination signal was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The interactive interrupt (SIGINT on Unix, Ctrl-C on Windows).
    Interrupt,
    /// The service-manager termination request (SIGTERM on Unix, console
    /// shutdown on Windows).
    Terminate,
}

/// A live subscription to OS termination signals.
///
/// Registration happens when the subscription is created; signals raised from
/// that point on are buffered even while nobody is waiting in
/// [`recv`](TerminationSignals::recv). Dropping the subscription releases the
/// registration.
#[async_trait]
pub trait TerminationSignals: Send {
    /// Waits for the next termination signal.
    ///
    /// Resolves only when a signal actually arrives. A subscription that can
    /// no longer observe signals must stay pending forever rather than
    /// resolve spuriously.
    async fn recv(&mut self) -> Termination;
}

/// Factory for the platform-appropriate termination signal subscription.
///
/// Platform crates implement this trait; the facade selects one at compile
/// time.
pub trait TerminationSignalsFactory {
    /// The subscription type this factory creates.
    type Signals: TerminationSignals;

    /// Registers interest in the two conventional termination signals.
    fn subscribe() -> io::Result<Self::Signals>;
}

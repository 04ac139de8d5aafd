use crate::{Process, TerminationSignals};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Coordinates a single run of a wrapped process against OS termination
/// signals, reconciling whichever terminal event fires first into exactly one
/// outcome.
///
/// A coordinator drives one run and is consumed by it; build a fresh one for
/// every run so no channel state is ever shared between invocations.
pub struct Lifecycle<S> {
    proc: Arc<dyn Process>,
    signals: S,
}

impl<S: TerminationSignals> Lifecycle<S> {
    /// Pairs a process with an already-registered signal subscription. The
    /// subscription must be created before the process is launched so a
    /// signal raised early is buffered rather than lost.
    pub fn new(proc: Arc<dyn Process>, signals: S) -> Self {
        Self { proc, signals }
    }

    /// Runs the wrapped process until a terminal event occurs.
    ///
    /// The process's [`run`](Process::run) entry point is launched on a
    /// background task. Whichever happens first wins:
    ///
    /// - a termination signal arrives: [`interrupt`](Process::interrupt) is
    ///   invoked exactly once and its result becomes the outcome;
    /// - the process's `run` returns an error: that error is relayed verbatim
    ///   as the outcome.
    ///
    /// The losing event is discarded. A process that returns cleanly produces
    /// no event at all, leaving the coordinator waiting until a termination
    /// signal arrives; a process that can finish on its own must be stopped
    /// externally.
    ///
    /// On every exit path the signal subscription and the result channel are
    /// released, so a run never leaks a dangling listener.
    pub async fn run(self) -> Result<()> {
        let Self { proc, mut signals } = self;

        // at most one value is ever sent per run
        let (err_tx, mut err_rx) = mpsc::channel::<anyhow::Error>(1);

        let runner = Arc::clone(&proc);
        tokio::spawn(async move {
            if let Err(err) = runner.run().await {
                // a failed send means an outcome was already committed
                let _ = err_tx.send(err).await;
            }
        });
        debug!("wrapped process launched");

        tokio::select! {
            kind = signals.recv() => {
                debug!(signal = ?kind, "termination signal received, interrupting wrapped process");
                proc.interrupt().await
            }
            Some(err) = err_rx.recv() => Err(err),
        }
    }
}

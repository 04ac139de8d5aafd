use std::io;
use svc_core::TerminationSignalsFactory;

/// Platform-independent factory that selects the appropriate termination
/// signal subscription at compile time.
pub struct PlatformTerminationSignalsFactory;

impl TerminationSignalsFactory for PlatformTerminationSignalsFactory {
    #[cfg(unix)]
    type Signals = svc_unix::UnixTerminationSignals;

    #[cfg(windows)]
    type Signals = svc_windows::WindowsTerminationSignals;

    fn subscribe() -> io::Result<Self::Signals> {
        #[cfg(unix)]
        return svc_unix::UnixTerminationSignals::subscribe();

        #[cfg(windows)]
        return svc_windows::WindowsTerminationSignals::subscribe();
    }
}

//! Windows termination signal subscription for the svc service wrapper.

mod signals;

pub use signals::WindowsTerminationSignals;

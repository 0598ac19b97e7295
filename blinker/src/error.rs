//! Error type for the blink loop.

use core::fmt;

/// Failure of a single transition.
///
/// `E` is the pin's own error type, `Infallible` on most HALs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The output pin rejected the write. Nothing was logged and the state
    /// did not advance.
    Pin(E),
    /// The log sink failed. The pin was still driven and the delay still ran.
    Log,
}

impl<E> From<fmt::Error> for Error<E> {
    fn from(_: fmt::Error) -> Self {
        Error::Log
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin write failed: {:?}", e),
            Error::Log => f.write_str("log write failed"),
        }
    }
}

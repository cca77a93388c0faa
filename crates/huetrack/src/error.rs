use core::fmt;

/// Estimation failures surfaced to the caller.
///
/// "No detection" is not an error: it is a defined result carried by
/// [`crate::Estimate`]. Only frame-source failures abort an estimate call,
/// and they are never retried inside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frame source reported not-ready at call start.
    SourceNotReady,
    /// The frame source failed while producing a frame.
    Acquisition(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotReady => write!(f, "frame source is not ready"),
            Self::Acquisition(msg) => write!(f, "frame acquisition failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

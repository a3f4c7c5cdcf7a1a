use std::fmt;

/// The artifact could not be measured at probe time.
///
/// Expected during normal operation: the producer may still be writing the
/// file, or it vanished between the notification and the read. The event is
/// dropped, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    Unavailable,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Unavailable => write!(f, "artifact unavailable at probe time"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// The filesystem notification stream failed to start or died.
///
/// Fatal for the whole pipeline: no metrics can be produced without a live
/// feed, so this is escalated instead of continuing silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    StreamFailure(String),
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::StreamFailure(reason) => {
                write!(f, "notification stream failure: {}", reason)
            }
        }
    }
}

impl std::error::Error for WatchError {}

use thiserror::Error;

/// A stopwatch operation was called in a state that does not allow it.
///
/// The stopwatch is left exactly as it was before the failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("Stopwatch has already started.")]
    AlreadyStarted,
    #[error("Stopwatch is not started.")]
    NotStarted,
    #[error("Stopwatch is still running.")]
    StillRunning,
}

pub type Result<T, E = InvalidStateError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(
            InvalidStateError::AlreadyStarted.to_string(),
            "Stopwatch has already started."
        );
        assert_eq!(
            InvalidStateError::NotStarted.to_string(),
            "Stopwatch is not started."
        );
        assert_eq!(
            InvalidStateError::StillRunning.to_string(),
            "Stopwatch is still running."
        );
    }
}

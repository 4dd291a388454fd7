//! Resolution error types

use std::io;
use thiserror::Error;

/// Failure of a resolution run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The merged framework value matched none of the supported frameworks
    #[error("A (valid) framework must be selected")]
    FrameworkNotSelected,

    /// The user abandoned an interactive prompt
    #[error("Setup cancelled.")]
    Cancelled,

    /// The prompt subsystem failed for a reason other than an abort
    #[error("Prompt failed: {0}")]
    Prompt(io::Error),
}

impl From<io::Error> for ScaffoldError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled
        } else {
            ScaffoldError::Prompt(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_maps_to_cancelled() {
        let err: ScaffoldError = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c").into();
        assert!(matches!(err, ScaffoldError::Cancelled));
    }

    #[test]
    fn test_other_io_errors_are_prompt_failures() {
        let err: ScaffoldError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ScaffoldError::Prompt(_)));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_fatal_message_is_stable() {
        assert_eq!(
            ScaffoldError::FrameworkNotSelected.to_string(),
            "A (valid) framework must be selected"
        );
    }
}

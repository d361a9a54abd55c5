//! Error types for the triage domain.

use thiserror::Error;

/// Dialogue orchestration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrchestratorError {
    /// A classification is already in flight for this session; new input
    /// is rejected until the classifier replies.
    #[error("Classification already in progress for this session")]
    ClassificationInProgress,

    /// The submitted turn carried no text.
    #[error("Turn text cannot be empty")]
    EmptyTurn,

    /// A reply arrived for a session that was not awaiting one.
    #[error("Session is not awaiting a classification reply")]
    NotClassifying,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            OrchestratorError::ClassificationInProgress.to_string(),
            "Classification already in progress for this session"
        );
        assert_eq!(
            OrchestratorError::EmptyTurn.to_string(),
            "Turn text cannot be empty"
        );
    }
}

//! Classifier Port - Interface for the external classification collaborator.
//!
//! The classifier receives a rendered `ClassificationRequest` and returns
//! raw text. Its reply is untrusted: interpretation and validation happen
//! in the domain layer (`triage::interpret`), never here.

use async_trait::async_trait;

use crate::domain::triage::ClassificationRequest;

/// Classifier errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The collaborator is unavailable.
    #[error("classifier unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The reply envelope could not be read at the transport level.
    #[error("invalid reply: {0}")]
    InvalidReply(String),
}

impl ClassifierError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates an invalid reply error.
    pub fn invalid_reply(message: impl Into<String>) -> Self {
        Self::InvalidReply(message.into())
    }

    /// Returns true if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClassifierError::Network(_)
                | ClassifierError::Timeout { .. }
                | ClassifierError::Unavailable { .. }
        )
    }
}

/// Port for the external conversation classifier.
///
/// Implementations connect to a language-model API and translate between
/// its wire format and the raw reply text the domain interprets.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classifies a conversation, returning the raw reply text.
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_error_retryable_classification() {
        assert!(ClassifierError::network("connection reset").is_retryable());
        assert!(ClassifierError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(ClassifierError::unavailable("503").is_retryable());

        assert!(!ClassifierError::AuthenticationFailed.is_retryable());
        assert!(!ClassifierError::invalid_reply("no choices").is_retryable());
    }

    #[test]
    fn classifier_error_displays_correctly() {
        let err = ClassifierError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");

        let err = ClassifierError::network("dns failure");
        assert_eq!(err.to_string(), "network error: dns failure");
    }
}

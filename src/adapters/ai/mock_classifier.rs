//! Mock Classifier for testing.
//!
//! Configurable mock implementation of the Classifier port so tests can
//! run the whole dialogue pipeline without calling a real API.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated delays for suspension-point testing
//! - Error injection for resilience testing
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::triage::ClassificationRequest;
use crate::ports::{Classifier, ClassifierError};

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    /// Return this raw text.
    Success(String),
    /// Return an error.
    Error(MockClassifierError),
}

/// Mock error kinds for testing failure handling.
#[derive(Debug, Clone)]
pub enum MockClassifierError {
    /// Simulate a network failure.
    Network { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate the collaborator being down.
    Unavailable { message: String },
    /// Simulate bad credentials.
    AuthenticationFailed,
}

impl From<MockClassifierError> for ClassifierError {
    fn from(err: MockClassifierError) -> Self {
        match err {
            MockClassifierError::Network { message } => ClassifierError::network(message),
            MockClassifierError::Timeout { timeout_secs } => {
                ClassifierError::Timeout { timeout_secs }
            }
            MockClassifierError::Unavailable { message } => ClassifierError::unavailable(message),
            MockClassifierError::AuthenticationFailed => ClassifierError::AuthenticationFailed,
        }
    }
}

/// Mock classifier for testing.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Prompts of every request received.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    /// Creates a new mock classifier with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw reply to the queue.
    pub fn with_reply(self, raw: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(raw.into()));
        self
    }

    /// Adds a recommendation-shaped JSON reply to the queue.
    pub fn with_recommendation(self, message: &str, specialty: &str) -> Self {
        self.with_reply(format!(
            r#"{{"message":"{}","speciality":"{}"}}"#,
            message, specialty
        ))
    }

    /// Adds a clarification-shaped JSON reply to the queue.
    pub fn with_needs_info(self, message: &str, missing: &str) -> Self {
        self.with_reply(format!(
            r#"{{"message":"{}","missing_information":"{}"}}"#,
            message, missing
        ))
    }

    /// Adds an error reply to the queue.
    pub fn with_error(self, error: MockClassifierError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the prompts of all recorded calls.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Gets the next reply or a default plain message.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Success(r#"{"message":"Mock reply"}"#.to_string()))
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError> {
        self.calls.lock().unwrap().push(request.prompt.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Success(raw) => Ok(raw),
            MockReply::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> ClassificationRequest {
        ClassificationRequest {
            prompt: "User: chest pain".to_string(),
        }
    }

    #[tokio::test]
    async fn mock_classifier_returns_replies_in_order() {
        let classifier = MockClassifier::new()
            .with_reply("first")
            .with_reply("second");

        assert_eq!(classifier.classify(&test_request()).await.unwrap(), "first");
        assert_eq!(classifier.classify(&test_request()).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn mock_classifier_returns_default_after_exhausted() {
        let classifier = MockClassifier::new();
        let reply = classifier.classify(&test_request()).await.unwrap();
        assert_eq!(reply, r#"{"message":"Mock reply"}"#);
    }

    #[tokio::test]
    async fn mock_classifier_returns_configured_error() {
        let classifier = MockClassifier::new().with_error(MockClassifierError::Timeout {
            timeout_secs: 30,
        });

        let result = classifier.classify(&test_request()).await;
        assert!(matches!(
            result,
            Err(ClassifierError::Timeout { timeout_secs: 30 })
        ));
    }

    #[tokio::test]
    async fn mock_classifier_tracks_calls() {
        let classifier = MockClassifier::new().with_reply("reply");
        assert_eq!(classifier.call_count(), 0);

        classifier.classify(&test_request()).await.unwrap();
        assert_eq!(classifier.call_count(), 1);
        assert_eq!(classifier.get_calls()[0], "User: chest pain");
    }

    #[tokio::test]
    async fn mock_classifier_shapes_recommendation_json() {
        let classifier = MockClassifier::new().with_recommendation("See a cardiologist.", "Cardiology");
        let raw = classifier.classify(&test_request()).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["speciality"], "Cardiology");
    }

    #[tokio::test]
    async fn mock_classifier_respects_delay() {
        let classifier = MockClassifier::new()
            .with_reply("delayed")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        classifier.classify(&test_request()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}

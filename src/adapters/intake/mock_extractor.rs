//! Mock Document Extractor for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{DocumentExtractor, DocumentUpload, ExtractError};

/// A configured mock extraction result.
#[derive(Debug, Clone)]
enum MockExtraction {
    Success(String),
    Unsupported(String),
    Failed(String),
}

/// Mock extractor returning queued extraction results.
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    extractions: Arc<Mutex<VecDeque<MockExtraction>>>,
}

impl MockExtractor {
    /// Creates a new mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful extraction.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.extractions
            .lock()
            .unwrap()
            .push_back(MockExtraction::Success(text.into()));
        self
    }

    /// Queues an unsupported-format failure.
    pub fn with_unsupported(self, format: impl Into<String>) -> Self {
        self.extractions
            .lock()
            .unwrap()
            .push_back(MockExtraction::Unsupported(format.into()));
        self
    }

    /// Queues a read failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.extractions
            .lock()
            .unwrap()
            .push_back(MockExtraction::Failed(message.into()));
        self
    }
}

#[async_trait]
impl DocumentExtractor for MockExtractor {
    async fn extract(&self, _upload: &DocumentUpload) -> Result<String, ExtractError> {
        match self.extractions.lock().unwrap().pop_front() {
            Some(MockExtraction::Success(text)) => {
                if text.trim().is_empty() {
                    Err(ExtractError::EmptyDocument)
                } else {
                    Ok(text)
                }
            }
            Some(MockExtraction::Unsupported(format)) => {
                Err(ExtractError::UnsupportedFormat(format))
            }
            Some(MockExtraction::Failed(message)) => Err(ExtractError::ReadFailed(message)),
            None => Ok("mock document text".to_string()),
        }
    }
}

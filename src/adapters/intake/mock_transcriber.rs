//! Mock Transcriber for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AudioClip, Transcriber, TranscriberError};

/// A configured mock transcription result.
#[derive(Debug, Clone)]
enum MockTranscript {
    Success(String),
    Denied,
    Failed(String),
}

/// Mock transcriber returning queued transcripts.
#[derive(Debug, Clone, Default)]
pub struct MockTranscriber {
    transcripts: Arc<Mutex<VecDeque<MockTranscript>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockTranscriber {
    /// Creates a new mock transcriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful transcript.
    pub fn with_transcript(self, text: impl Into<String>) -> Self {
        self.transcripts
            .lock()
            .unwrap()
            .push_back(MockTranscript::Success(text.into()));
        self
    }

    /// Queues a permission-denied failure.
    pub fn with_denied(self) -> Self {
        self.transcripts
            .lock()
            .unwrap()
            .push_back(MockTranscript::Denied);
        self
    }

    /// Queues a recognition failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.transcripts
            .lock()
            .unwrap()
            .push_back(MockTranscript::Failed(message.into()));
        self
    }

    /// Number of transcription calls received.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &AudioClip) -> Result<String, TranscriberError> {
        *self.calls.lock().unwrap() += 1;

        match self.transcripts.lock().unwrap().pop_front() {
            Some(MockTranscript::Success(text)) => {
                if text.trim().is_empty() {
                    Err(TranscriberError::EmptyTranscript)
                } else {
                    Ok(text)
                }
            }
            Some(MockTranscript::Denied) => Err(TranscriberError::RecognitionDenied),
            Some(MockTranscript::Failed(message)) => {
                Err(TranscriberError::RecognitionFailed(message))
            }
            None => Ok("mock transcript".to_string()),
        }
    }
}

//! Transcriber Port - Interface for the audio-to-text collaborator.
//!
//! Audio capture itself is out of scope; the core only consumes the
//! finished transcript, which becomes an ordinary user turn.

use async_trait::async_trait;

/// A recorded audio clip handed to the transcriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Raw encoded audio bytes.
    pub bytes: Vec<u8>,
    /// Container/codec hint, e.g. "m4a".
    pub format: String,
}

impl AudioClip {
    /// Creates a clip from raw bytes and a format hint.
    pub fn new(bytes: Vec<u8>, format: impl Into<String>) -> Self {
        Self {
            bytes,
            format: format.into(),
        }
    }
}

/// Transcriber errors.
#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    /// The user denied speech recognition permission.
    #[error("speech recognition permission denied")]
    RecognitionDenied,

    /// Recognition ran but failed.
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),

    /// Recognition finished without producing any text.
    #[error("transcript was empty")]
    EmptyTranscript,
}

/// Port for the external speech-to-text collaborator.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes an audio clip into text.
    async fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriberError>;
}

//! Document Extractor Port - Interface for the file-to-text collaborator.
//!
//! File-format parsing (PDF and friends) is out of scope; the core only
//! consumes the extracted text, which becomes a user turn carrying a
//! `DocumentRef` attachment.

use async_trait::async_trait;

/// An uploaded document handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    /// Original file name as uploaded.
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    /// Creates an upload from a file name and its bytes.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Document extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The file format is not supported by this extractor.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be read.
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// Extraction finished without producing any text.
    #[error("document contained no extractable text")]
    EmptyDocument,
}

/// Port for the external document-to-text collaborator.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extracts text from an uploaded document.
    async fn extract(&self, upload: &DocumentUpload) -> Result<String, ExtractError>;
}

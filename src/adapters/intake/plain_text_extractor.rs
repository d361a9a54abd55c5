//! Plain text document extractor.
//!
//! Handles text-based uploads (.txt, .md) by decoding their bytes as
//! UTF-8. Rich formats are out of scope and reported as unsupported so
//! the caller can surface a useful message.

use async_trait::async_trait;

use crate::ports::{DocumentExtractor, DocumentUpload, ExtractError};

/// File extensions this extractor accepts.
const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Extractor for plain-text documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Creates a new plain text extractor.
    pub fn new() -> Self {
        Self
    }

    fn extension(file_name: &str) -> Option<&str> {
        file_name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

#[async_trait]
impl DocumentExtractor for PlainTextExtractor {
    async fn extract(&self, upload: &DocumentUpload) -> Result<String, ExtractError> {
        let extension = Self::extension(&upload.file_name)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ExtractError::UnsupportedFormat(extension));
        }

        let text = String::from_utf8(upload.bytes.clone())
            .map_err(|e| ExtractError::ReadFailed(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_utf8_text_files() {
        let extractor = PlainTextExtractor::new();
        let upload = DocumentUpload::new("symptoms.txt", b"persistent cough for two weeks".to_vec());

        let text = extractor.extract(&upload).await.unwrap();
        assert_eq!(text, "persistent cough for two weeks");
    }

    #[tokio::test]
    async fn rejects_unsupported_extensions() {
        let extractor = PlainTextExtractor::new();
        let upload = DocumentUpload::new("scan.pdf", vec![0x25, 0x50]);

        let result = extractor.extract(&upload).await;
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(ext)) if ext == "pdf"));
    }

    #[tokio::test]
    async fn rejects_invalid_utf8() {
        let extractor = PlainTextExtractor::new();
        let upload = DocumentUpload::new("notes.txt", vec![0xff, 0xfe, 0x00]);

        assert!(matches!(
            extractor.extract(&upload).await,
            Err(ExtractError::ReadFailed(_))
        ));
    }

    #[tokio::test]
    async fn rejects_empty_documents() {
        let extractor = PlainTextExtractor::new();
        let upload = DocumentUpload::new("blank.txt", b"  \n ".to_vec());

        assert!(matches!(
            extractor.extract(&upload).await,
            Err(ExtractError::EmptyDocument)
        ));
    }

    #[tokio::test]
    async fn extension_is_case_insensitive() {
        let extractor = PlainTextExtractor::new();
        let upload = DocumentUpload::new("NOTES.TXT", b"rash on both arms".to_vec());

        assert!(extractor.extract(&upload).await.is_ok());
    }
}

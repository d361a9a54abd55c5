//! Intake adapters - transcriber and document extractor implementations.

mod mock_extractor;
mod mock_transcriber;
mod plain_text_extractor;

pub use mock_extractor::MockExtractor;
pub use mock_transcriber::MockTranscriber;
pub use plain_text_extractor::PlainTextExtractor;

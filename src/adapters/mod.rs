//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Classifier implementations (OpenAI-compatible API, mock)
//! - `intake` - Transcriber and document extractor implementations
//! - `taxonomy` - Catalog sources (YAML file, embedded default)
//! - `storage` - Session stores (in-memory)
//! - `http` - Axum delivery surface

pub mod ai;
pub mod http;
pub mod intake;
pub mod storage;
pub mod taxonomy;

pub use ai::{MockClassifier, MockClassifierError, OpenAiClassifier, OpenAiClassifierConfig};
pub use intake::{MockExtractor, MockTranscriber, PlainTextExtractor};
pub use storage::InMemorySessionStore;
pub use taxonomy::{EmbeddedCatalogSource, YamlCatalogSource};

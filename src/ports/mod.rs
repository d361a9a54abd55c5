//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `Classifier` - External language model mapping conversations to
//!   structured specialist suggestions
//! - `Transcriber` - Audio to text
//! - `DocumentExtractor` - Uploaded file to text
//!
//! ## Infrastructure Ports
//!
//! - `TaxonomySource` - Startup-time catalog loading
//! - `SessionStore` - Live session storage

mod classifier;
mod document_extractor;
mod session_store;
mod taxonomy_source;
mod transcriber;

pub use classifier::{Classifier, ClassifierError};
pub use document_extractor::{DocumentExtractor, DocumentUpload, ExtractError};
pub use session_store::{SessionStore, SessionStoreError};
pub use taxonomy_source::{TaxonomyError, TaxonomySource};
pub use transcriber::{AudioClip, Transcriber, TranscriberError};

//! Session Store Port - Storage for live triage sessions.
//!
//! Sessions live only for the duration of the process; durable persistence
//! of conversation history is explicitly out of scope, so the only shipped
//! implementation is in-memory.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::triage::TriageSession;

/// Errors that can occur during session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session not found: {0}")]
    NotFound(SessionId),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Port for saving and loading live sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session snapshot, replacing any previous one.
    async fn save(&self, session: &TriageSession) -> Result<(), SessionStoreError>;

    /// Loads a session snapshot.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists.
    async fn load(&self, id: SessionId) -> Result<TriageSession, SessionStoreError>;

    /// Removes a session, if present.
    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError>;
}

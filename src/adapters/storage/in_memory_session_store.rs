//! In-Memory Session Store Adapter
//!
//! Stores live triage sessions in memory. This is the only session store
//! the service ships: conversation history is deliberately not persisted
//! beyond the process lifetime.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::triage::TriageSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for triage sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, TriageSession>>>,
}

impl InMemorySessionStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Clears all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &TriageSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<TriageSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let store = InMemorySessionStore::new();
        let session = TriageSession::new();

        store.save(&session).await.unwrap();
        let loaded = store.load(session.id).await.unwrap();

        assert_eq!(loaded, session);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn load_missing_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let result = store.load(SessionId::new()).await;

        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn save_replaces_previous_snapshot() {
        let store = InMemorySessionStore::new();
        let mut session = TriageSession::new();
        store.save(&session).await.unwrap();

        session
            .conversation
            .push(crate::domain::conversation::Turn::user("hello"));
        store.save(&session).await.unwrap();

        let loaded = store.load(session.id).await.unwrap();
        assert_eq!(loaded.conversation.len(), 1);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn remove_deletes_session() {
        let store = InMemorySessionStore::new();
        let session = TriageSession::new();
        store.save(&session).await.unwrap();

        store.remove(session.id).await.unwrap();
        assert!(store.load(session.id).await.is_err());
    }
}

//! StartSessionHandler - Create a fresh triage session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::triage::TriageSession;
use crate::ports::{SessionStore, SessionStoreError};

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
}

/// Handler that creates and stores a new session.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<StartSessionResult, SessionStoreError> {
        let session = TriageSession::new();
        self.store.save(&session).await?;

        tracing::info!(session_id = %session.id, "started triage session");
        Ok(StartSessionResult {
            session_id: session.id,
        })
    }
}

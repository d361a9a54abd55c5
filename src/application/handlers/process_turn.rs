//! ProcessTurnHandler - Drive the dialogue for one user turn.
//!
//! Loads the session, hands the turn to the orchestrator, performs the
//! classifier call when the orchestrator suspends, and persists the
//! updated session. The classifier call is the single await point of the
//! pipeline; while it is in flight the stored session is visibly in the
//! `Classifying` state and further sends are rejected.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::{DocumentRef, Turn};
use crate::domain::foundation::SessionId;
use crate::domain::taxonomy::Provider;
use crate::domain::triage::{
    DialogueOrchestrator, DialogueState, OrchestratorError, TurnDisposition,
};
use crate::ports::{Classifier, SessionStore, SessionStoreError};

/// Command to process one user turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub session_id: SessionId,
    pub text: String,
    /// Present when the text was extracted from an uploaded document.
    pub attachment: Option<DocumentRef>,
}

/// Result of processing a turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub session_id: SessionId,
    /// Session state after processing (always `AwaitingUserInput` today;
    /// kept explicit so callers render the loading state correctly).
    pub state: DialogueState,
    /// Assistant turns emitted in response to this user turn.
    pub replies: Vec<Turn>,
    /// Canonical specialty, when a recommendation was made.
    pub specialty: Option<String>,
    /// Recommended provider, when one was found.
    pub provider: Option<Provider>,
}

/// Error type for turn processing.
#[derive(Debug, Error)]
pub enum ProcessTurnError {
    #[error("session not found: {0}")]
    NotFound(SessionId),

    #[error("a classification is already in progress for this session")]
    SessionBusy,

    #[error("message text cannot be empty")]
    EmptyMessage,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("orchestrator error: {0}")]
    Orchestrator(String),
}

impl From<SessionStoreError> for ProcessTurnError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ProcessTurnError::NotFound(id),
            other => ProcessTurnError::Storage(other.to_string()),
        }
    }
}

impl From<OrchestratorError> for ProcessTurnError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::ClassificationInProgress => ProcessTurnError::SessionBusy,
            OrchestratorError::EmptyTurn => ProcessTurnError::EmptyMessage,
            other => ProcessTurnError::Orchestrator(other.to_string()),
        }
    }
}

/// Handler for processing user turns.
pub struct ProcessTurnHandler {
    store: Arc<dyn SessionStore>,
    classifier: Arc<dyn Classifier>,
    orchestrator: Arc<DialogueOrchestrator>,
}

impl ProcessTurnHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        classifier: Arc<dyn Classifier>,
        orchestrator: Arc<DialogueOrchestrator>,
    ) -> Self {
        Self {
            store,
            classifier,
            orchestrator,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessTurnCommand,
    ) -> Result<ProcessTurnResult, ProcessTurnError> {
        let mut session = self.store.load(cmd.session_id).await?;

        let turn = match cmd.attachment {
            Some(attachment) => Turn::user_with_attachment(cmd.text, attachment),
            None => Turn::user(cmd.text),
        };

        let disposition = self.orchestrator.receive_user_turn(&mut session, turn)?;

        match disposition {
            TurnDisposition::FollowUp(question) => {
                self.store.save(&session).await?;

                Ok(ProcessTurnResult {
                    session_id: session.id,
                    state: session.state,
                    replies: vec![question],
                    specialty: None,
                    provider: None,
                })
            }
            TurnDisposition::AwaitingClassifier(request) => {
                // Persist the suspended state before the await point so the
                // loading state is visible and overlapping sends bounce.
                self.store.save(&session).await?;

                let (replies, specialty, provider) =
                    match self.classifier.classify(&request).await {
                        Ok(raw_reply) => {
                            let reply = self
                                .orchestrator
                                .complete_classification(&mut session, &raw_reply)?;
                            (vec![reply.turn], reply.specialty, reply.provider)
                        }
                        Err(err) => {
                            tracing::warn!(
                                session_id = %session.id,
                                error = %err,
                                retryable = err.is_retryable(),
                                "classifier call failed"
                            );
                            let turn = self.orchestrator.fail_classification(&mut session)?;
                            (vec![turn], None, None)
                        }
                    };

                self.store.save(&session).await?;

                Ok(ProcessTurnResult {
                    session_id: session.id,
                    state: session.state,
                    replies,
                    specialty,
                    provider,
                })
            }
        }
    }
}

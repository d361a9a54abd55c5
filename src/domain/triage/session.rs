//! Triage session entity.
//!
//! Owns one conversation log and the caller-visible dialogue state. The
//! session is an explicit object rather than ambient mutable state: every
//! transition goes through a method, and snapshots are handed back to
//! callers after each processed turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::conversation::Conversation;
use crate::domain::foundation::SessionId;

use super::errors::OrchestratorError;

/// Caller-visible dialogue state.
///
/// Sufficiency evaluation and follow-up selection happen synchronously
/// within one turn, so the only state observable between calls is whether
/// the session is idle or suspended on the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Idle; the next user turn will be accepted.
    AwaitingUserInput,
    /// A classifier call is in flight; new sends are rejected.
    Classifying,
}

/// State of one triage dialogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageSession {
    pub id: SessionId,
    pub conversation: Conversation,
    pub state: DialogueState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TriageSession {
    /// Creates a fresh session with an empty conversation.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            conversation: Conversation::new(),
            state: DialogueState::AwaitingUserInput,
            created_at: now,
            updated_at: now,
        }
    }

    /// True while a classifier call is in flight.
    pub fn is_classifying(&self) -> bool {
        self.state == DialogueState::Classifying
    }

    /// Marks the session as suspended on the classifier.
    ///
    /// Fails if a classification is already in flight; the conversation
    /// must never have two overlapping classifier calls.
    pub fn begin_classification(&mut self) -> Result<(), OrchestratorError> {
        if self.is_classifying() {
            return Err(OrchestratorError::ClassificationInProgress);
        }
        self.state = DialogueState::Classifying;
        self.touch();
        Ok(())
    }

    /// Returns the session to the idle state after the classifier
    /// replied or failed.
    pub fn finish_classification(&mut self) {
        self.state = DialogueState::AwaitingUserInput;
        self.touch();
    }

    /// Updates the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for TriageSession {
    fn default() -> Self {
        Self::new()
    }
}

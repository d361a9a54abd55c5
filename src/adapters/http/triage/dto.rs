//! HTTP DTOs for triage endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::ProcessTurnResult;
use crate::domain::conversation::{Turn, TurnRole};
use crate::domain::taxonomy::Provider;
use crate::domain::triage::{DialogueState, TriageSession};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for sending a typed (or pre-transcribed) message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// The user's message text.
    pub text: String,
}

/// Body for attaching a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachDocumentRequest {
    /// Original file name, used for format detection.
    pub file_name: String,
    /// Raw file content.
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// View of one turn for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView {
    /// Turn ID.
    pub id: String,
    /// Who authored the turn.
    pub role: TurnRoleDto,
    /// Turn text.
    pub text: String,
    /// File name of the source document, when the turn came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    /// When the turn was recorded.
    pub timestamp: String,
}

/// Role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRoleDto {
    User,
    Assistant,
}

/// View of a recommended provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderView {
    pub name: String,
    pub phone: String,
    pub availability: bool,
    pub specialty: String,
}

/// Response to creating a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Response to a processed turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub session_id: String,
    /// Session state after processing.
    pub state: DialogueState,
    /// Assistant turns emitted in response.
    pub replies: Vec<TurnView>,
    /// Canonical specialty, when a recommendation was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Recommended provider, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderView>,
}

/// View of a whole conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub session_id: String,
    pub state: DialogueState,
    pub turns: Vec<TurnView>,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversions
// ════════════════════════════════════════════════════════════════════════════════

impl From<&Turn> for TurnView {
    fn from(turn: &Turn) -> Self {
        Self {
            id: turn.id.to_string(),
            role: match turn.role {
                TurnRole::User => TurnRoleDto::User,
                TurnRole::Assistant => TurnRoleDto::Assistant,
            },
            text: turn.text.clone(),
            attachment: turn.attachment.as_ref().map(|a| a.file_name.clone()),
            timestamp: turn.timestamp.to_rfc3339(),
        }
    }
}

impl From<&Provider> for ProviderView {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.name.clone(),
            phone: provider.phone.clone(),
            availability: provider.availability,
            specialty: provider.specialty.clone(),
        }
    }
}

impl From<&ProcessTurnResult> for TurnResponse {
    fn from(result: &ProcessTurnResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            state: result.state,
            replies: result.replies.iter().map(TurnView::from).collect(),
            specialty: result.specialty.clone(),
            provider: result.provider.as_ref().map(ProviderView::from),
        }
    }
}

impl From<&TriageSession> for ConversationView {
    fn from(session: &TriageSession) -> Self {
        Self {
            session_id: session.id.to_string(),
            state: session.state,
            turns: session.conversation.turns().iter().map(TurnView::from).collect(),
        }
    }
}

//! HTTP handlers for triage endpoints.
//!
//! These handlers connect Axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{
    AttachDocumentCommand, AttachDocumentHandler, ProcessTurnCommand, ProcessTurnError,
    ProcessTurnHandler, StartSessionHandler,
};
use crate::domain::foundation::SessionId;
use crate::ports::{DocumentUpload, SessionStore};

use super::dto::{
    AttachDocumentRequest, ConversationView, CreateSessionResponse, ErrorResponse,
    SendMessageRequest, TurnResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for triage handlers.
#[derive(Clone)]
pub struct TriageAppState {
    pub start_session: Arc<StartSessionHandler>,
    pub process_turn: Arc<ProcessTurnHandler>,
    pub attach_document: Arc<AttachDocumentHandler>,
    pub store: Arc<dyn SessionStore>,
}

impl TriageAppState {
    /// Creates a new TriageAppState.
    pub fn new(
        start_session: Arc<StartSessionHandler>,
        process_turn: Arc<ProcessTurnHandler>,
        attach_document: Arc<AttachDocumentHandler>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            start_session,
            process_turn,
            attach_document,
            store,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API Error
// ════════════════════════════════════════════════════════════════════════════════

/// Errors surfaced by the triage API.
#[derive(Debug)]
pub enum TriageApiError {
    BadRequest(String),
    NotFound(String),
    Busy(String),
    Internal(String),
}

impl From<ProcessTurnError> for TriageApiError {
    fn from(err: ProcessTurnError) -> Self {
        match err {
            ProcessTurnError::NotFound(id) => {
                TriageApiError::NotFound(format!("Session {} not found", id))
            }
            ProcessTurnError::SessionBusy => TriageApiError::Busy(err.to_string()),
            ProcessTurnError::EmptyMessage => TriageApiError::BadRequest(err.to_string()),
            other => TriageApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for TriageApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            TriageApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "bad_request", message)
            }
            TriageApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            TriageApiError::Busy(message) => (StatusCode::CONFLICT, "busy", message),
            TriageApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, TriageApiError> {
    raw.parse()
        .map_err(|_| TriageApiError::BadRequest("Invalid session ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/sessions
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a new triage session.
pub async fn create_session(
    State(state): State<TriageAppState>,
) -> Result<impl IntoResponse, TriageApiError> {
    let result = state
        .start_session
        .handle()
        .await
        .map_err(|e| TriageApiError::Internal(e.to_string()))?;

    let body = CreateSessionResponse {
        session_id: result.session_id.to_string(),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/sessions/{id}/messages
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/{id}/messages - Send a user message.
///
/// # Errors
/// - 400 Bad Request: invalid session ID or empty message
/// - 404 Not Found: unknown session
/// - 409 Conflict: a classification is already in flight
pub async fn send_message(
    State(state): State<TriageAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, TriageApiError> {
    let session_id = parse_session_id(&session_id)?;

    let result = state
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: request.text,
            attachment: None,
        })
        .await?;

    Ok((StatusCode::OK, Json(TurnResponse::from(&result))))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/sessions/{id}/documents
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/{id}/documents - Attach an uploaded document.
///
/// Extraction failures are recovered into a fallback reply, so this
/// endpoint only errors for unknown sessions or malformed requests.
pub async fn attach_document(
    State(state): State<TriageAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AttachDocumentRequest>,
) -> Result<impl IntoResponse, TriageApiError> {
    let session_id = parse_session_id(&session_id)?;

    let result = state
        .attach_document
        .handle(AttachDocumentCommand {
            session_id,
            upload: DocumentUpload::new(request.file_name, request.content.into_bytes()),
        })
        .await?;

    Ok((StatusCode::OK, Json(TurnResponse::from(&result))))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /api/sessions/{id}/conversation
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/{id}/conversation - Fetch the full turn history.
pub async fn get_conversation(
    State(state): State<TriageAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, TriageApiError> {
    let session_id = parse_session_id(&session_id)?;

    let session = state.store.load(session_id).await.map_err(|e| match e {
        crate::ports::SessionStoreError::NotFound(id) => {
            TriageApiError::NotFound(format!("Session {} not found", id))
        }
        other => TriageApiError::Internal(other.to_string()),
    })?;

    Ok((StatusCode::OK, Json(ConversationView::from(&session))))
}

//! Axum routes for triage endpoints.
//!
//! Defines the routing table for all triage-related HTTP endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    attach_document, create_session, get_conversation, send_message, TriageAppState,
};

/// Creates routes for triage endpoints.
///
/// REST Endpoints:
/// - POST /api/sessions - Start a triage session
/// - POST /api/sessions/{session_id}/messages - Send a user message
/// - POST /api/sessions/{session_id}/documents - Attach a document
/// - GET /api/sessions/{session_id}/conversation - Fetch turn history
pub fn triage_routes() -> Router<TriageAppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:session_id/messages", post(send_message))
        .route("/sessions/:session_id/documents", post(attach_document))
        .route("/sessions/:session_id/conversation", get(get_conversation))
}

/// Combined router with all triage routes under /api.
pub fn triage_router() -> Router<TriageAppState> {
    Router::new().nest("/api", triage_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triage_routes_creates_valid_router() {
        let _routes = triage_routes();
    }

    #[test]
    fn triage_router_creates_combined_router() {
        let _router = triage_router();
    }
}

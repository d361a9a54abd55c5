//! HTTP surface for the triage dialogue.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TriageAppState;
pub use routes::{triage_router, triage_routes};

//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports: loading the session, driving the dialogue orchestrator, calling
//! collaborators, and persisting the updated session.

pub mod handlers;

pub use handlers::{
    AttachDocumentCommand, AttachDocumentHandler, ProcessTurnCommand, ProcessTurnError,
    ProcessTurnHandler, ProcessTurnResult, StartSessionHandler, StartSessionResult,
    SubmitTranscriptCommand, SubmitTranscriptHandler,
};

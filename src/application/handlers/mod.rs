//! Command handlers for the triage dialogue.

mod attach_document;
mod process_turn;
mod start_session;
mod submit_transcript;

pub use attach_document::{AttachDocumentCommand, AttachDocumentHandler};
pub use process_turn::{
    ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult,
};
pub use start_session::{StartSessionHandler, StartSessionResult};
pub use submit_transcript::{SubmitTranscriptCommand, SubmitTranscriptHandler};

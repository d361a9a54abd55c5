//! Conversation Domain Module
//!
//! The append-only turn log for a triage session, the lexical sufficiency
//! heuristic that decides whether classification can be attempted, and the
//! follow-up question pool used when more detail is needed.

mod followup;
mod log;
mod turn;

pub use followup::{
    FirstSelector, FollowUpSelector, QuestionPool, UniformSelector, FALLBACK_QUESTION,
    FOLLOW_UP_QUESTIONS,
};
pub use log::Conversation;
pub use turn::{DocumentRef, Turn, TurnRole};

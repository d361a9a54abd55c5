//! Conversation log - append-only turn history for one session.

use serde::{Deserialize, Serialize};

use super::turn::{Turn, TurnRole};

/// Minimum token count (exclusive) the combined user text must exceed
/// before classification is attempted. "head hurts" is two tokens and not
/// enough; "I have headaches" is three and is.
const SUFFICIENCY_TOKEN_THRESHOLD: usize = 2;

/// Ordered sequence of turns owned by one active session.
///
/// Turns are appended, never mutated or removed. The log lives only as
/// long as the session; there is no durable persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Appends a turn to the log.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in the log.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True if no turn has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Concatenated text of every user turn, newest last.
    pub fn combined_user_text(&self) -> String {
        let mut text = String::new();
        for turn in self.turns.iter().filter(|t| t.is_user()) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&turn.text);
        }
        text
    }

    /// Whether enough symptom detail has been gathered to classify.
    ///
    /// Lexical heuristic: the combined user text must contain strictly
    /// more than two whitespace-separated tokens. Evaluated over all user
    /// turns so the clarification loop terminates once enough total
    /// context has accumulated.
    pub fn is_sufficient(&self) -> bool {
        self.combined_user_text().split_whitespace().count() > SUFFICIENCY_TOKEN_THRESHOLD
    }

    /// True if the assistant has already said `text` verbatim.
    pub fn assistant_has_said(&self, text: &str) -> bool {
        self.turns
            .iter()
            .any(|t| t.role == TurnRole::Assistant && t.text == text)
    }
}

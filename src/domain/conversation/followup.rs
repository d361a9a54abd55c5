//! Follow-up question pool and selection strategies.
//!
//! When a conversation is not yet information-sufficient, the orchestrator
//! asks one question from a fixed pool, skipping questions already asked
//! in this conversation. Selection among the remaining candidates is a
//! pluggable strategy so tests can inject a deterministic one while
//! production uses uniform randomness.

use rand::Rng;

use super::log::Conversation;

/// Fixed pool of clarification questions.
pub const FOLLOW_UP_QUESTIONS: [&str; 5] = [
    "Could you describe where exactly you feel the discomfort?",
    "How long have you been experiencing these symptoms?",
    "How severe are the symptoms, from mild to unbearable?",
    "Have you noticed anything that makes the symptoms better or worse?",
    "Are there any other symptoms alongside the main one?",
];

/// Question used once every pooled question has been asked.
pub const FALLBACK_QUESTION: &str = "Could you tell me a bit more about your symptoms?";

/// Strategy for choosing among remaining follow-up candidates.
///
/// `pick` receives a non-empty candidate list and returns an index into it.
pub trait FollowUpSelector: Send + Sync {
    fn pick(&self, candidates: &[&str]) -> usize;
}

/// Production selector: uniform-random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl FollowUpSelector for UniformSelector {
    fn pick(&self, candidates: &[&str]) -> usize {
        rand::thread_rng().gen_range(0..candidates.len())
    }
}

/// Deterministic selector: always the first remaining candidate.
///
/// Used by tests and available to embedders that want reproducible
/// dialogues.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl FollowUpSelector for FirstSelector {
    fn pick(&self, _candidates: &[&str]) -> usize {
        0
    }
}

/// The follow-up question pool with its exhaustion fallback.
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<String>,
    fallback: String,
}

impl Default for QuestionPool {
    fn default() -> Self {
        Self {
            questions: FOLLOW_UP_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            fallback: FALLBACK_QUESTION.to_string(),
        }
    }
}

impl QuestionPool {
    /// Creates a pool from custom questions and fallback.
    pub fn new(questions: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            questions,
            fallback: fallback.into(),
        }
    }

    /// Questions not yet asked in this conversation, in pool order.
    fn remaining<'a>(&'a self, conversation: &Conversation) -> Vec<&'a str> {
        self.questions
            .iter()
            .map(String::as_str)
            .filter(|q| !conversation.assistant_has_said(q))
            .collect()
    }

    /// Picks the next follow-up question for a conversation.
    ///
    /// Questions the assistant has already asked (by exact text match) are
    /// excluded; when the pool is exhausted the generic fallback question
    /// is returned rather than an error.
    pub fn next_question(
        &self,
        conversation: &Conversation,
        selector: &dyn FollowUpSelector,
    ) -> String {
        let remaining = self.remaining(conversation);
        if remaining.is_empty() {
            return self.fallback.clone();
        }

        let index = selector.pick(&remaining);
        remaining[index].to_string()
    }
}

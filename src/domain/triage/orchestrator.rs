//! Dialogue orchestrator - drives one triage conversation per user turn.
//!
//! Pure domain logic: the orchestrator decides what happens next but never
//! performs I/O. The single asynchronous boundary (the classifier call)
//! is expressed as a `TurnDisposition::AwaitingClassifier` handed back to
//! the application layer, which resumes the session with
//! `complete_classification` or `fail_classification`.

use std::sync::Arc;

use crate::domain::conversation::{FollowUpSelector, QuestionPool, Turn};
use crate::domain::taxonomy::{Provider, SpecialtyCatalog};

use super::errors::OrchestratorError;
use super::interpreter::interpret;
use super::outcome::ClassificationOutcome;
use super::prompt::ClassificationRequest;
use super::session::TriageSession;

/// Message emitted when a collaborator call fails.
const COLLABORATOR_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't process that right now. Please try again.";

/// Message emitted when not even a plain message could be extracted.
const UNPARSEABLE_REPLY_MESSAGE: &str =
    "Sorry, I didn't catch that. Could you describe your symptoms again?";

/// What the orchestrator decided after ingesting a user turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnDisposition {
    /// Not enough information yet; this follow-up question was appended
    /// to the conversation and the session stays idle.
    FollowUp(Turn),

    /// Enough information; the session is suspended and this request must
    /// be sent to the classifier.
    AwaitingClassifier(ClassificationRequest),
}

/// Everything produced by resuming a session with a classifier reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierReply {
    /// The assistant turn appended to the conversation.
    pub turn: Turn,
    /// How the raw reply was interpreted.
    pub outcome: ClassificationOutcome,
    /// Canonical specialty, when the outcome was a recommendation.
    pub specialty: Option<String>,
    /// The provider recommended to the user, when one was found.
    pub provider: Option<Provider>,
}

/// Ties the sufficiency check, request builder, interpreter, matcher and
/// provider directory together, one user turn at a time.
///
/// Stateless apart from its configuration; all per-conversation state
/// lives in the `TriageSession` passed into each call, so one orchestrator
/// serves any number of concurrent sessions.
pub struct DialogueOrchestrator {
    catalog: Arc<SpecialtyCatalog>,
    pool: QuestionPool,
    selector: Arc<dyn FollowUpSelector>,
}

impl DialogueOrchestrator {
    /// Creates an orchestrator with the default follow-up pool.
    pub fn new(catalog: Arc<SpecialtyCatalog>, selector: Arc<dyn FollowUpSelector>) -> Self {
        Self {
            catalog,
            pool: QuestionPool::default(),
            selector,
        }
    }

    /// Replaces the follow-up question pool.
    pub fn with_pool(mut self, pool: QuestionPool) -> Self {
        self.pool = pool;
        self
    }

    /// Ingests one user turn and decides the next action.
    ///
    /// Appends the turn to the log, then either asks a follow-up question
    /// (insufficient information) or suspends the session on the
    /// classifier (sufficient). Rejects input while a classification is
    /// in flight and rejects blank turns.
    pub fn receive_user_turn(
        &self,
        session: &mut TriageSession,
        turn: Turn,
    ) -> Result<TurnDisposition, OrchestratorError> {
        if session.is_classifying() {
            return Err(OrchestratorError::ClassificationInProgress);
        }
        if turn.text.trim().is_empty() {
            return Err(OrchestratorError::EmptyTurn);
        }

        session.conversation.push(turn);
        session.touch();

        if !session.conversation.is_sufficient() {
            let question = self
                .pool
                .next_question(&session.conversation, self.selector.as_ref());
            tracing::debug!(session_id = %session.id, "insufficient detail, asking follow-up");

            let asked = Turn::assistant(question);
            session.conversation.push(asked.clone());
            return Ok(TurnDisposition::FollowUp(asked));
        }

        session.begin_classification()?;
        let request = ClassificationRequest::build(&session.conversation, &self.catalog);
        tracing::debug!(session_id = %session.id, "suspending on classifier");

        Ok(TurnDisposition::AwaitingClassifier(request))
    }

    /// Resumes a suspended session with the classifier's raw reply.
    ///
    /// Interprets the reply, resolves and looks up providers for a
    /// recommendation, and always appends exactly one assistant turn: the
    /// reply is never dropped, and a recommendation for a specialty with
    /// no providers degrades to a "not found" message.
    pub fn complete_classification(
        &self,
        session: &mut TriageSession,
        raw_reply: &str,
    ) -> Result<ClassifierReply, OrchestratorError> {
        if !session.is_classifying() {
            return Err(OrchestratorError::NotClassifying);
        }
        session.finish_classification();

        let outcome = interpret(raw_reply);
        let (text, specialty, provider) = match &outcome {
            ClassificationOutcome::Recommendation { message, specialty } => {
                let canonical = self.catalog.resolve(specialty).to_string();
                let provider = self.catalog.first_provider(&canonical).cloned();
                tracing::info!(
                    session_id = %session.id,
                    label = %specialty,
                    specialty = %canonical,
                    provider_found = provider.is_some(),
                    "resolved specialist recommendation"
                );

                match provider {
                    Some(provider) => (message.clone(), Some(canonical), Some(provider)),
                    None => (
                        format!(
                            "I couldn't find a {} provider right now. Please check back later.",
                            canonical
                        ),
                        Some(canonical),
                        None,
                    ),
                }
            }
            ClassificationOutcome::NeedsInfo { message, .. }
            | ClassificationOutcome::Plain { message } => (message.clone(), None, None),
            ClassificationOutcome::Unparseable => {
                (UNPARSEABLE_REPLY_MESSAGE.to_string(), None, None)
            }
        };

        let turn = Turn::assistant(text);
        session.conversation.push(turn.clone());

        Ok(ClassifierReply {
            turn,
            outcome,
            specialty,
            provider,
        })
    }

    /// Resumes a suspended session after a classifier failure.
    ///
    /// The failure is recovered locally: a fallback message is appended
    /// and the session returns to accepting input. Never fatal.
    pub fn fail_classification(
        &self,
        session: &mut TriageSession,
    ) -> Result<Turn, OrchestratorError> {
        if !session.is_classifying() {
            return Err(OrchestratorError::NotClassifying);
        }
        session.finish_classification();

        let turn = Turn::assistant(COLLABORATOR_FAILURE_MESSAGE);
        session.conversation.push(turn.clone());
        Ok(turn)
    }

    /// The catalog this orchestrator resolves specialties against.
    pub fn catalog(&self) -> &SpecialtyCatalog {
        &self.catalog
    }
}

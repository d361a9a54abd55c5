//! SubmitTranscriptHandler - Voice input flow.
//!
//! Hands the recorded clip to the transcriber collaborator; a finished
//! transcript becomes an ordinary user turn processed exactly like typed
//! text. Transcription failures are recovered locally into a user-visible
//! fallback message, never into a session-fatal error.

use std::sync::Arc;

use crate::domain::conversation::Turn;
use crate::domain::foundation::SessionId;
use crate::ports::{AudioClip, SessionStore, Transcriber};

use super::process_turn::{ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult};

/// Message emitted when transcription fails.
const TRANSCRIPTION_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't process that recording. Please try again or type your symptoms.";

/// Command to submit a recorded audio clip.
#[derive(Debug, Clone)]
pub struct SubmitTranscriptCommand {
    pub session_id: SessionId,
    pub audio: AudioClip,
}

/// Handler for the voice intake flow.
pub struct SubmitTranscriptHandler {
    transcriber: Arc<dyn Transcriber>,
    store: Arc<dyn SessionStore>,
    process_turn: Arc<ProcessTurnHandler>,
}

impl SubmitTranscriptHandler {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        store: Arc<dyn SessionStore>,
        process_turn: Arc<ProcessTurnHandler>,
    ) -> Self {
        Self {
            transcriber,
            store,
            process_turn,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitTranscriptCommand,
    ) -> Result<ProcessTurnResult, ProcessTurnError> {
        match self.transcriber.transcribe(&cmd.audio).await {
            Ok(text) => {
                self.process_turn
                    .handle(ProcessTurnCommand {
                        session_id: cmd.session_id,
                        text,
                        attachment: None,
                    })
                    .await
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    error = %err,
                    "transcription failed"
                );
                recover_with_fallback(
                    &*self.store,
                    cmd.session_id,
                    TRANSCRIPTION_FAILURE_MESSAGE,
                )
                .await
            }
        }
    }
}

/// Appends a fallback assistant turn and returns a normal result, keeping
/// the session alive after a collaborator failure.
pub(super) async fn recover_with_fallback(
    store: &dyn SessionStore,
    session_id: SessionId,
    message: &str,
) -> Result<ProcessTurnResult, ProcessTurnError> {
    let mut session = store.load(session_id).await?;
    let turn = Turn::assistant(message);
    session.conversation.push(turn.clone());
    session.touch();
    store.save(&session).await?;

    Ok(ProcessTurnResult {
        session_id: session.id,
        state: session.state,
        replies: vec![turn],
        specialty: None,
        provider: None,
    })
}

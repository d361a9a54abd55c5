//! AttachDocumentHandler - Document upload flow.
//!
//! Hands the uploaded file to the document extractor collaborator; once
//! text is extracted it becomes a user turn carrying a `DocumentRef`
//! attachment and is processed like any other turn. Extraction failures
//! are recovered locally into a user-visible fallback message.

use std::sync::Arc;

use crate::domain::conversation::DocumentRef;
use crate::domain::foundation::SessionId;
use crate::ports::{DocumentExtractor, DocumentUpload, SessionStore};

use super::process_turn::{ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult};
use super::submit_transcript::recover_with_fallback;

/// Message emitted when extraction fails.
const EXTRACTION_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't read that document. Please try another file or type your symptoms.";

/// Command to attach an uploaded document.
#[derive(Debug, Clone)]
pub struct AttachDocumentCommand {
    pub session_id: SessionId,
    pub upload: DocumentUpload,
}

/// Handler for the document intake flow.
pub struct AttachDocumentHandler {
    extractor: Arc<dyn DocumentExtractor>,
    store: Arc<dyn SessionStore>,
    process_turn: Arc<ProcessTurnHandler>,
}

impl AttachDocumentHandler {
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        store: Arc<dyn SessionStore>,
        process_turn: Arc<ProcessTurnHandler>,
    ) -> Self {
        Self {
            extractor,
            store,
            process_turn,
        }
    }

    pub async fn handle(
        &self,
        cmd: AttachDocumentCommand,
    ) -> Result<ProcessTurnResult, ProcessTurnError> {
        match self.extractor.extract(&cmd.upload).await {
            Ok(text) => {
                self.process_turn
                    .handle(ProcessTurnCommand {
                        session_id: cmd.session_id,
                        text,
                        attachment: Some(DocumentRef::new(&cmd.upload.file_name)),
                    })
                    .await
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    file_name = %cmd.upload.file_name,
                    error = %err,
                    "document extraction failed"
                );
                recover_with_fallback(&*self.store, cmd.session_id, EXTRACTION_FAILURE_MESSAGE)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, MockClassifier, MockExtractor};
    use crate::domain::conversation::FirstSelector;
    use crate::domain::taxonomy::{Provider, SpecialtyCatalog};
    use crate::domain::triage::{DialogueOrchestrator, TriageSession};
    use std::collections::BTreeMap;

    fn test_catalog() -> Arc<SpecialtyCatalog> {
        let mut providers = BTreeMap::new();
        providers.insert(
            "Gastroenterology".to_string(),
            vec![Provider::new(
                "Dr. Gut",
                "+1-555-0002",
                true,
                "Gastroenterology",
            )],
        );
        providers.insert(
            "Primary Care".to_string(),
            vec![Provider::new(
                "Dr. General",
                "+1-555-0005",
                true,
                "Primary Care",
            )],
        );
        Arc::new(SpecialtyCatalog::new(providers).unwrap())
    }

    fn handler_with(
        extractor: MockExtractor,
        classifier: MockClassifier,
    ) -> (AttachDocumentHandler, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        let orchestrator = Arc::new(DialogueOrchestrator::new(
            test_catalog(),
            Arc::new(FirstSelector),
        ));
        let process_turn = Arc::new(ProcessTurnHandler::new(
            store.clone(),
            Arc::new(classifier),
            orchestrator,
        ));
        let handler = AttachDocumentHandler::new(Arc::new(extractor), store.clone(), process_turn);
        (handler, store)
    }

    async fn seeded_session(store: &InMemorySessionStore) -> SessionId {
        let session = TriageSession::new();
        store.save(&session).await.unwrap();
        session.id
    }

    #[tokio::test]
    async fn test_extracted_text_becomes_attached_user_turn() {
        let extractor =
            MockExtractor::new().with_text("recurring stomach cramps after meals");
        let classifier = MockClassifier::new()
            .with_recommendation("A gastroenterologist can help.", "Gastroenterology");
        let (handler, store) = handler_with(extractor, classifier);
        let session_id = seeded_session(&store).await;

        let result = handler
            .handle(AttachDocumentCommand {
                session_id,
                upload: DocumentUpload::new("notes.txt", b"irrelevant".to_vec()),
            })
            .await
            .unwrap();

        assert_eq!(result.specialty.as_deref(), Some("Gastroenterology"));

        let session = store.load(session_id).await.unwrap();
        let user_turn = &session.conversation.turns()[0];
        assert_eq!(user_turn.text, "recurring stomach cramps after meals");
        assert_eq!(user_turn.attachment.as_ref().unwrap().file_name, "notes.txt");
    }

    #[tokio::test]
    async fn test_unsupported_format_recovers_with_fallback() {
        let extractor = MockExtractor::new().with_unsupported("pdf");
        let (handler, store) = handler_with(extractor, MockClassifier::new());
        let session_id = seeded_session(&store).await;

        let result = handler
            .handle(AttachDocumentCommand {
                session_id,
                upload: DocumentUpload::new("scan.pdf", vec![0x25]),
            })
            .await
            .unwrap();

        assert_eq!(result.replies[0].text, EXTRACTION_FAILURE_MESSAGE);

        let session = store.load(session_id).await.unwrap();
        assert_eq!(session.conversation.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_session_still_fails() {
        let extractor = MockExtractor::new().with_failure("disk error");
        let (handler, _store) = handler_with(extractor, MockClassifier::new());

        let result = handler
            .handle(AttachDocumentCommand {
                session_id: SessionId::new(),
                upload: DocumentUpload::new("notes.txt", vec![]),
            })
            .await;

        assert!(matches!(result, Err(ProcessTurnError::NotFound(_))));
    }
}

//! End-to-end dialogue flow against mock collaborators.
//!
//! Drives whole conversations through the application handlers: the
//! clarification loop, classification with a noisy specialty label,
//! collaborator outages, and the voice/document intake paths.

use std::sync::Arc;

use medtriage::adapters::{
    EmbeddedCatalogSource, InMemorySessionStore, MockClassifier, MockClassifierError,
    MockTranscriber, PlainTextExtractor,
};
use medtriage::application::{
    AttachDocumentCommand, AttachDocumentHandler, ProcessTurnCommand, ProcessTurnError,
    ProcessTurnHandler, StartSessionHandler, SubmitTranscriptCommand, SubmitTranscriptHandler,
};
use medtriage::domain::conversation::{FirstSelector, TurnRole, FOLLOW_UP_QUESTIONS};
use medtriage::domain::triage::DialogueState;
use medtriage::ports::{AudioClip, DocumentUpload, SessionStore, TaxonomySource};

struct TestApp {
    store: Arc<InMemorySessionStore>,
    start_session: StartSessionHandler,
    process_turn: Arc<ProcessTurnHandler>,
    submit_transcript: SubmitTranscriptHandler,
    attach_document: AttachDocumentHandler,
    classifier: MockClassifier,
    transcriber: MockTranscriber,
}

fn build_app(classifier: MockClassifier, transcriber: MockTranscriber) -> TestApp {
    let catalog = Arc::new(EmbeddedCatalogSource::new().load().unwrap());
    let store = Arc::new(InMemorySessionStore::new());
    let orchestrator = Arc::new(medtriage::domain::triage::DialogueOrchestrator::new(
        catalog,
        Arc::new(FirstSelector),
    ));

    let process_turn = Arc::new(ProcessTurnHandler::new(
        store.clone(),
        Arc::new(classifier.clone()),
        orchestrator,
    ));
    let start_session = StartSessionHandler::new(store.clone());
    let submit_transcript = SubmitTranscriptHandler::new(
        Arc::new(transcriber.clone()),
        store.clone(),
        process_turn.clone(),
    );
    let attach_document = AttachDocumentHandler::new(
        Arc::new(PlainTextExtractor::new()),
        store.clone(),
        process_turn.clone(),
    );

    TestApp {
        store,
        start_session,
        process_turn,
        submit_transcript,
        attach_document,
        classifier,
        transcriber,
    }
}

#[tokio::test]
async fn short_message_gets_follow_up_question_without_classification() {
    let app = build_app(MockClassifier::new(), MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "head hurts".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(result.replies.len(), 1);
    assert!(FOLLOW_UP_QUESTIONS.contains(&result.replies[0].text.as_str()));
    assert!(result.specialty.is_none());
    // The classifier was never consulted for an insufficient turn.
    assert_eq!(app.classifier.call_count(), 0);
}

#[tokio::test]
async fn noisy_specialty_label_resolves_to_catalog_provider() {
    let classifier = MockClassifier::new().with_reply(
        r#"{"message":"Based on your symptoms, it would be best to consult a cardiologist.","speciality":"Cardiolog"}"#,
    );
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "I have chest pain and shortness of breath".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    // The typo'd label resolves through the matcher, not literally.
    assert_eq!(result.specialty.as_deref(), Some("Cardiology"));
    let provider = result.provider.unwrap();
    assert_eq!(provider.specialty, "Cardiology");
    assert_eq!(
        result.replies[0].text,
        "Based on your symptoms, it would be best to consult a cardiologist."
    );
}

#[tokio::test]
async fn unrecognized_label_falls_back_to_primary_care() {
    let classifier = MockClassifier::new()
        .with_reply(r#"{"message":"You should see a specialist.","speciality":"xyz"}"#);
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "strange tingling all over my body".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(result.specialty.as_deref(), Some("Primary Care"));
    assert_eq!(result.provider.unwrap().specialty, "Primary Care");
}

#[tokio::test]
async fn clarification_reply_is_emitted_verbatim_and_loop_continues() {
    let classifier = MockClassifier::new()
        .with_needs_info(
            "Could you provide more information on pain location?",
            "pain location",
        )
        .with_recommendation("An orthopedist can help with that.", "Orthopedics");
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let first = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "I have had pain for weeks".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(
        first.replies[0].text,
        "Could you provide more information on pain location?"
    );
    assert!(first.specialty.is_none());
    assert!(first.provider.is_none());

    let second = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "mostly in my left knee".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(second.specialty.as_deref(), Some("Orthopedics"));
    assert_eq!(app.classifier.call_count(), 2);
}

#[tokio::test]
async fn classifier_outage_yields_fallback_message_and_session_survives() {
    let classifier = MockClassifier::new()
        .with_error(MockClassifierError::Timeout { timeout_secs: 30 })
        .with_recommendation("A neurologist is the right fit.", "Neurology");
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let failed = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "constant migraines and blurred vision".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert!(failed.replies[0].text.contains("couldn't process"));
    assert_eq!(failed.state, DialogueState::AwaitingUserInput);

    // Retrying on the same session works.
    let retried = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "still having constant migraines".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(retried.specialty.as_deref(), Some("Neurology"));
}

#[tokio::test]
async fn plain_prose_reply_reaches_the_user_unchanged() {
    let prose = "I am not sure yet, but it sounds like you should rest and hydrate.";
    let classifier = MockClassifier::new().with_reply(prose);
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "I feel weak and feverish".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(result.replies[0].text, prose);
    assert!(result.specialty.is_none());
}

#[tokio::test]
async fn transcribed_audio_flows_like_typed_text() {
    let classifier =
        MockClassifier::new().with_recommendation("Please consult a dermatologist.", "Dermatology");
    let transcriber =
        MockTranscriber::new().with_transcript("itchy rash spreading on both arms");
    let app = build_app(classifier, transcriber);
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .submit_transcript
        .handle(SubmitTranscriptCommand {
            session_id,
            audio: AudioClip::new(vec![0u8; 64], "m4a"),
        })
        .await
        .unwrap();

    assert_eq!(result.specialty.as_deref(), Some("Dermatology"));
    assert_eq!(app.transcriber.call_count(), 1);

    let session = app.store.load(session_id).await.unwrap();
    assert_eq!(
        session.conversation.turns()[0].text,
        "itchy rash spreading on both arms"
    );
    assert_eq!(session.conversation.turns()[0].role, TurnRole::User);
}

#[tokio::test]
async fn document_upload_produces_attached_turn_and_recommendation() {
    let classifier = MockClassifier::new()
        .with_recommendation("A gastroenterologist can help.", "Gastroenterology");
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .attach_document
        .handle(AttachDocumentCommand {
            session_id,
            upload: DocumentUpload::new(
                "symptoms.txt",
                b"recurring stomach cramps and nausea after every meal".to_vec(),
            ),
        })
        .await
        .unwrap();

    assert_eq!(result.specialty.as_deref(), Some("Gastroenterology"));

    let session = app.store.load(session_id).await.unwrap();
    let user_turn = &session.conversation.turns()[0];
    assert_eq!(
        user_turn.attachment.as_ref().unwrap().file_name,
        "symptoms.txt"
    );
}

#[tokio::test]
async fn unsupported_document_recovers_with_fallback_message() {
    let app = build_app(MockClassifier::new(), MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let result = app
        .attach_document
        .handle(AttachDocumentCommand {
            session_id,
            upload: DocumentUpload::new("scan.pdf", vec![0x25, 0x50, 0x44, 0x46]),
        })
        .await
        .unwrap();

    assert!(result.replies[0].text.contains("couldn't read"));

    // Session is intact and still accepts typed input.
    let follow = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "fine, I will type it out".to_string(),
            attachment: None,
        })
        .await;
    assert!(follow.is_ok());
}

#[tokio::test]
async fn overlapping_sends_are_rejected_while_classifying() {
    let classifier = MockClassifier::new()
        .with_delay(std::time::Duration::from_millis(200))
        .with_recommendation("See a cardiologist.", "Cardiology");
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    let first = {
        let process_turn = app.process_turn.clone();
        tokio::spawn(async move {
            process_turn
                .handle(ProcessTurnCommand {
                    session_id,
                    text: "chest pain radiating to my arm".to_string(),
                    attachment: None,
                })
                .await
        })
    };

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // The stored session is visibly classifying while the call is in flight.
    let snapshot = app.store.load(session_id).await.unwrap();
    assert_eq!(snapshot.state, DialogueState::Classifying);

    let second = app
        .process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "also feeling dizzy".to_string(),
            attachment: None,
        })
        .await;
    assert!(matches!(second, Err(ProcessTurnError::SessionBusy)));

    let first = first.await.unwrap().unwrap();
    assert_eq!(first.specialty.as_deref(), Some("Cardiology"));
}

#[tokio::test]
async fn full_conversation_is_readable_from_the_store() {
    let classifier = MockClassifier::new()
        .with_recommendation("Best to see a cardiologist.", "Cardiology");
    let app = build_app(classifier, MockTranscriber::new());
    let session_id = app.start_session.handle().await.unwrap().session_id;

    app.process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "head hurts".to_string(),
            attachment: None,
        })
        .await
        .unwrap();
    app.process_turn
        .handle(ProcessTurnCommand {
            session_id,
            text: "sharp pain behind the eyes".to_string(),
            attachment: None,
        })
        .await
        .unwrap();

    let session = app.store.load(session_id).await.unwrap();
    // user, follow-up, user, recommendation
    assert_eq!(session.conversation.len(), 4);
    assert_eq!(session.conversation.turns()[0].role, TurnRole::User);
    assert_eq!(session.conversation.turns()[1].role, TurnRole::Assistant);
    assert_eq!(session.conversation.turns()[3].role, TurnRole::Assistant);
}

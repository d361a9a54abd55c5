//! Medtriage server binary.
//!
//! Wires the configuration, catalog, classifier and HTTP surface
//! together. Taxonomy load failure is fatal: without the catalog the
//! matcher and provider directory cannot operate, so the process refuses
//! to start rather than serving broken resolutions.

use std::sync::Arc;
use std::time::Duration;

use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use medtriage::adapters::http::triage::{triage_router, TriageAppState};
use medtriage::adapters::{
    EmbeddedCatalogSource, InMemorySessionStore, OpenAiClassifier, OpenAiClassifierConfig,
    PlainTextExtractor, YamlCatalogSource,
};
use medtriage::application::{AttachDocumentHandler, ProcessTurnHandler, StartSessionHandler};
use medtriage::config::{AppConfig, ValidationError};
use medtriage::domain::conversation::UniformSelector;
use medtriage::domain::triage::DialogueOrchestrator;
use medtriage::ports::TaxonomySource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let catalog = match config.taxonomy.catalog_path.as_deref() {
        Some(path) if !path.is_empty() => YamlCatalogSource::new(path).load()?,
        _ => EmbeddedCatalogSource::new().load()?,
    };
    let catalog = Arc::new(catalog);

    let api_key = config
        .classifier
        .api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("CLASSIFIER_API_KEY"))?;
    let classifier = Arc::new(OpenAiClassifier::new(
        OpenAiClassifierConfig::new(api_key)
            .with_model(&config.classifier.model)
            .with_base_url(&config.classifier.base_url)
            .with_timeout(config.classifier.timeout()),
    )?);

    let store = Arc::new(InMemorySessionStore::new());
    let orchestrator = Arc::new(DialogueOrchestrator::new(
        catalog,
        Arc::new(UniformSelector),
    ));

    let process_turn = Arc::new(ProcessTurnHandler::new(
        store.clone(),
        classifier,
        orchestrator,
    ));
    let start_session = Arc::new(StartSessionHandler::new(store.clone()));
    let attach_document = Arc::new(AttachDocumentHandler::new(
        Arc::new(PlainTextExtractor::new()),
        store.clone(),
        process_turn.clone(),
    ));

    let state = TriageAppState::new(start_session, process_turn, attach_document, store);

    let app = triage_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting medtriage server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

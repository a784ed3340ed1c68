//! Prompt Relay server binary.
//!
//! Bootstrap order: configuration, logging, store connection, count-gated
//! default-prompt seeding, router assembly, serve.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use prompt_relay::adapters::ai::GroqProvider;
use prompt_relay::adapters::http::{app_router, ConversationHandlers, PromptHandlers};
use prompt_relay::adapters::mongo::{self, MongoConversationRepository, MongoPromptRepository};
use prompt_relay::adapters::storage::FileTranscriptMirror;
use prompt_relay::application::{ConversationService, PromptService};
use prompt_relay::config::AppConfig;
use prompt_relay::ports::TranscriptMirror;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    tracing::info!(model = %config.completion.model, "Prompt relay initializing");

    let database = mongo::connect(&config.mongo_uri).await?;
    let prompt_repo = Arc::new(MongoPromptRepository::new(&database));
    let conversation_repo = Arc::new(MongoConversationRepository::new(&database));

    let prompt_service = Arc::new(PromptService::new(prompt_repo.clone()));
    if prompt_service.seed_defaults().await? {
        tracing::info!("Prompt collection was empty; defaults inserted");
    }

    let provider = Arc::new(GroqProvider::new(
        config.api_key.clone(),
        config.completion.clone(),
    ));

    let mirror: Option<Arc<dyn TranscriptMirror>> = config
        .transcript_path
        .as_ref()
        .map(|path| {
            tracing::info!(path = %path.display(), "Transcript mirror enabled");
            Arc::new(FileTranscriptMirror::new(path)) as Arc<dyn TranscriptMirror>
        });

    let conversation_service = Arc::new(ConversationService::new(
        prompt_repo,
        provider,
        conversation_repo,
        mirror,
    ));

    let app = app_router(
        PromptHandlers::new(prompt_service),
        ConversationHandlers::new(conversation_service),
    );

    tracing::info!(host = %config.host, port = config.port, "Listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

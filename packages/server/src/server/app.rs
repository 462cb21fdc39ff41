//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use openai_client::OpenAIClient;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::alpha::FileQueue;
use crate::config::Config;
use crate::mindai::{MindAiClient, MindAiService};
use crate::query::{OpenAiIntentClassifier, QueryCache, QueryProcessor};
use crate::server::routes::{
    dequeue_alpha_handler, enqueue_alpha_handler, health_handler, process_query_handler,
    query_message_handler, top_gainers_handler, top_mentioned_tokens_handler,
    top_performing_kols_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<QueryProcessor>,
    pub mindai: Arc<MindAiService>,
    pub alpha_queue: Arc<FileQueue>,
}

impl AppState {
    /// Wire up all services from configuration.
    pub async fn from_config(config: &Config) -> Self {
        let openai_client = OpenAIClient::new(config.openai_api_key.clone());
        let classifier = Arc::new(OpenAiIntentClassifier::new(
            openai_client,
            config.llm_model.clone(),
            config.llm_temperature,
        ));

        let cache = Arc::new(QueryCache::load(&config.query_cache_file).await);
        let processor = Arc::new(QueryProcessor::new(classifier, cache));

        let mindai = Arc::new(MindAiService::new(MindAiClient::new(
            config.mindai_base_url.clone(),
            config.mindai_auth_key.clone(),
        )));

        let alpha_queue = Arc::new(FileQueue::new(&config.alpha_queue_file));

        Self {
            processor,
            mindai,
            alpha_queue,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/process_query", post(process_query_handler))
        .route("/query_message", post(query_message_handler))
        .route("/top-performing-kols/:period", get(top_performing_kols_handler))
        .route("/top-gainers/:period", get(top_gainers_handler))
        .route("/top-mentioned-tokens/:period", get(top_mentioned_tokens_handler))
        .route("/alpha/enqueue", post(enqueue_alpha_handler))
        .route("/alpha/dequeue", get(dequeue_alpha_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

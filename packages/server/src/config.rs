use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub mindai_base_url: String,
    pub mindai_auth_key: String,
    pub query_cache_file: PathBuf,
    pub alpha_queue_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .unwrap_or_else(|_| "0.2".to_string())
                .parse()
                .context("LLM_TEMPERATURE must be a valid number")?,
            mindai_base_url: env::var("MIND_AI_BASE_URL")
                .context("MIND_AI_BASE_URL must be set")?,
            mindai_auth_key: env::var("MIND_AI_AUTH_KEY")
                .context("MIND_AI_AUTH_KEY must be set")?,
            query_cache_file: env::var("QUERY_CACHE_FILE")
                .unwrap_or_else(|_| "query_cache.json".to_string())
                .into(),
            alpha_queue_file: env::var("ALPHA_QUEUE_FILE")
                .unwrap_or_else(|_| "alpha_queue.jsonl".to_string())
                .into(),
        })
    }
}

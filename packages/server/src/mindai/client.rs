//! HTTP client for the upstream analytics API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use super::types::{BestCallData, BestCallFilters, GainerData, InfluencerData, MentionedTokenData};
use crate::period::Period;

const DEFAULT_SORT_BY: &str = "RoaAtAth";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upstream analytics API errors.
#[derive(Debug, Error)]
pub enum MindAiError {
    /// Network error (connection failed, request timed out)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the upstream API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MindAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MindAiError::Parse(err.to_string())
        } else {
            MindAiError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MindAiError>;

/// Client for the upstream KOL analytics provider.
#[derive(Clone)]
pub struct MindAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MindAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch top-performing influencers for the given period.
    pub async fn get_top_performing(&self, period: Period) -> Result<Vec<InfluencerData>> {
        self.get("get-top-performing", &[("period", period.label().to_string())])
            .await
    }

    /// Fetch top gainers (grouped per token) for the given period.
    pub async fn get_top_gainers(&self, period: Period) -> Result<Vec<Vec<GainerData>>> {
        self.get("get-top-gainers", &[("period", period.label().to_string())])
            .await
    }

    /// Fetch the most mentioned tokens for the given period.
    pub async fn get_top_mentioned_tokens(&self, period: Period) -> Result<Vec<MentionedTokenData>> {
        self.get(
            "get-top-mentioned-tokens",
            &[("period", period.label().to_string())],
        )
        .await
    }

    /// Fetch the best call matching the given filters.
    ///
    /// The upstream endpoint returns either a single call object or an
    /// array; both normalize to a vec here.
    pub async fn get_best_call(&self, filters: &BestCallFilters) -> Result<Vec<BestCallData>> {
        let mut params: Vec<(&str, String)> = vec![(
            "sortBy",
            filters
                .sort_by
                .clone()
                .unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
        )];

        if let Some(period) = filters.period {
            params.push(("period", period.label().to_string()));
        }
        if let Some(ref username) = filters.influencer_twitter_user_name {
            params.push(("influencerTwitterUserName", username.clone()));
        }
        if let Some(ref symbol) = filters.coin_symbol {
            params.push(("coinSymbol", symbol.clone()));
        }

        let result: OneOrMany<BestCallData> = self.get("get-best-call", &params).await?;
        Ok(result.into_vec())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(endpoint = endpoint, status = %status, "Upstream analytics API error");
            return Err(MindAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MindAiError::Parse(e.to_string()))
    }
}

/// Endpoint responses that may be a single object or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

//! Fetch-and-format aggregation over the upstream analytics API.
//!
//! Each analytics operation pairs one upstream endpoint with one statically
//! chosen response shape (flat list vs grouped list) and one formatter; the
//! pairing is fixed per method, never resolved at runtime.

use super::client::{MindAiClient, Result};
use super::formatting;
use super::types::{
    BestCallFilters, BestCallResponse, TopGainersResponse, TopMentionedTokensResponse,
    TopPerformingResponse,
};
use crate::period::Period;

pub struct MindAiService {
    client: MindAiClient,
}

impl MindAiService {
    pub fn new(client: MindAiClient) -> Self {
        Self { client }
    }

    /// Top-performing influencers (flat list).
    pub async fn top_performing_kols(&self, period: Period) -> Result<TopPerformingResponse> {
        let data = self.client.get_top_performing(period).await?;
        let message = formatting::format_top_performing_kols(period.label(), &data);

        Ok(TopPerformingResponse { message, data })
    }

    /// Top gainers (grouped list, one group per token).
    pub async fn top_gainers(&self, period: Period) -> Result<TopGainersResponse> {
        let data = self.client.get_top_gainers(period).await?;
        let message = formatting::format_top_gainers(period.label(), &data);

        Ok(TopGainersResponse { message, data })
    }

    /// Most mentioned tokens (flat list).
    pub async fn top_mentioned_tokens(
        &self,
        period: Period,
    ) -> Result<TopMentionedTokensResponse> {
        let data = self.client.get_top_mentioned_tokens(period).await?;
        let message = formatting::format_top_mentioned_tokens(period.label(), &data);

        Ok(TopMentionedTokensResponse { message, data })
    }

    /// Best call matching the given filters (flat list).
    pub async fn best_call(&self, filters: &BestCallFilters) -> Result<BestCallResponse> {
        let data = self.client.get_best_call(filters).await?;
        let period_label = filters
            .period
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let message = formatting::format_best_call(&period_label, &data);

        Ok(BestCallResponse { message, data })
    }
}

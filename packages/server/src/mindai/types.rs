//! Typed records for the upstream analytics API.
//!
//! Field names follow the upstream wire format (camelCase, including its
//! "Tweeter" spelling); each endpoint gets a `*Response` wrapper carrying
//! the rendered bot message alongside the structured data.

use serde::{Deserialize, Serialize};

use crate::period::Period;

/// One tracked influencer with aggregate call performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerData {
    pub influencer_tweeter_user_name: String,
    pub avg_roa_at_ath: f64,
    pub total_mentions: i64,
    pub success_rate: f64,
    pub unique_tokens: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformingResponse {
    pub message: String,
    pub data: Vec<InfluencerData>,
}

/// One token call inside a top-gainers group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainerData {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub roa_at_ath_in_percentage: Option<f64>,
    #[serde(default)]
    pub roa_at_current_price_in_percentage: Option<f64>,
    #[serde(default)]
    pub influencer_tweeter_user_name: Option<String>,
    #[serde(default)]
    pub mention_date: Option<String>,
}

/// Top gainers arrive grouped: one inner list per token, best call first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopGainersResponse {
    pub message: String,
    pub data: Vec<Vec<GainerData>>,
}

/// One trending token with mention statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionedTokenData {
    pub symbol: String,
    pub cash_tag_mentions: i64,
    pub influencers_amount: i64,
    #[serde(default)]
    pub daily_change: Option<f64>,
    #[serde(default)]
    pub weekly_change: Option<f64>,
    #[serde(default)]
    pub monthly_change: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMentionedTokensResponse {
    pub message: String,
    pub data: Vec<MentionedTokenData>,
}

/// A single influencer call record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestCallData {
    pub influencer_tweeter_user_name: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub coin_gecko_id: Option<String>,
    #[serde(default)]
    pub mention_price: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub roa_at_current_price_in_percentage: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub roa_at_ath_in_percentage: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestCallResponse {
    pub message: String,
    pub data: Vec<BestCallData>,
}

/// Optional filters for the best-call endpoint.
#[derive(Debug, Clone, Default)]
pub struct BestCallFilters {
    pub period: Option<Period>,
    pub influencer_twitter_user_name: Option<String>,
    pub coin_symbol: Option<String>,
    pub sort_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influencer_data_uses_upstream_field_names() {
        let raw = r#"{
            "influencerTweeterUserName": "cryptomanran",
            "avgRoaAtAth": 41.5,
            "totalMentions": 12,
            "successRate": 75.0,
            "uniqueTokens": 9
        }"#;

        let parsed: InfluencerData = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.influencer_tweeter_user_name, "cryptomanran");
        assert_eq!(parsed.unique_tokens, 9);

        let back = serde_json::to_value(&parsed).unwrap();
        assert!(back.get("influencerTweeterUserName").is_some());
    }

    #[test]
    fn best_call_optional_fields_may_be_absent() {
        let raw = r#"{
            "influencerTweeterUserName": "kol",
            "name": "Pepe",
            "symbol": "pepe"
        }"#;

        let parsed: BestCallData = serde_json::from_str(raw).unwrap();
        assert!(parsed.roa_at_ath_in_percentage.is_none());
        assert!(parsed.created_at.is_none());
    }
}

//! Static intent dispatch.
//!
//! Maps each resolved intent to its handler through a closed match:
//! canned intents answer locally, analytics intents go through the
//! aggregation service. There is no string-keyed method lookup anywhere.

use anyhow::{Context, Result};
use serde_json::Value;

use super::service::MindAiService;
use super::types::BestCallFilters;
use crate::period::Period;
use crate::query::{Intent, Params};

const FALLBACK_RESPONSE: &str = "We're here to help! Ask me about KOLs, tokens, or market trends.";

/// Produce the bot message for a resolved (intent, params) pair.
pub async fn dispatch_query(
    service: &MindAiService,
    intent: Intent,
    params: &Params,
) -> Result<String> {
    match intent {
        Intent::Greeting => Ok("👋 gm! Ask me about KOLs, tokens, or market trends.".to_string()),

        Intent::StupidQuestion => {
            let question = params
                .get("question")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_lowercase();
            Ok(format!("🤔 {}... Really? Ask me something smarter!", question))
        }

        Intent::PlatformInfo => Ok(platform_response(
            params.get("type").and_then(Value::as_str).unwrap_or(""),
        )),

        Intent::TopGainers => {
            let response = service
                .top_gainers(Period::from_params(params))
                .await
                .context("Failed to fetch top gainers")?;
            Ok(response.message)
        }

        Intent::TopMentions => {
            let response = service
                .top_mentioned_tokens(Period::from_params(params))
                .await
                .context("Failed to fetch top mentioned tokens")?;
            Ok(response.message)
        }

        Intent::TopKols => {
            let response = service
                .top_performing_kols(Period::from_params(params))
                .await
                .context("Failed to fetch top performing KOLs")?;
            Ok(response.message)
        }

        Intent::BestCall => {
            let filters = BestCallFilters {
                period: Some(Period::from_params(params)),
                influencer_twitter_user_name: params
                    .get("influencerTwitterUserName")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                coin_symbol: params
                    .get("coinSymbol")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                sort_by: params
                    .get("sortBy")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };

            let response = service
                .best_call(&filters)
                .await
                .context("Failed to fetch best call")?;
            Ok(response.message)
        }

        // The processor never hands out Irrelevant, but dispatch stays total.
        Intent::Irrelevant => Ok(FALLBACK_RESPONSE.to_string()),
    }
}

fn platform_response(info_type: &str) -> String {
    match info_type {
        "launch" => "We're fine-tuning everything—launch details will be shared soon. Stay sharp!",
        "update" => "Features are rolling out in phases—expect updates regularly. Patience pays!",
        "features" => "We track KOL mentions and calculate ROI to show their real impact on tokens.",
        "metrics" => "We focus on data-backed insights to give investors clarity in a noisy market.",
        "community" => "Join our community to stay updated on the latest features and insights!",
        _ => FALLBACK_RESPONSE,
    }
    .to_string()
}

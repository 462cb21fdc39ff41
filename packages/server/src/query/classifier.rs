//! Model substrate seam for query classification.
//!
//! The processor only sees the `IntentClassifier` trait; production wires in
//! the OpenAI-backed implementation, tests inject a mock that counts calls.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::OpenAIClient;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::intent::{Intent, Params, QueryIntent};
use super::prompt::QUERY_SYSTEM_PROMPT;

/// Classifies a raw user query into a structured intent.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify one query. Any error (transport, timeout, malformed output)
    /// is surfaced as `Err`; the caller maps it to "no intent".
    async fn classify(&self, query: &str) -> Result<QueryIntent>;
}

/// OpenAI-backed classifier using structured output against the fixed
/// system prompt contract.
pub struct OpenAiIntentClassifier {
    client: OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAiIntentClassifier {
    pub fn new(client: OpenAIClient, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }
}

#[async_trait]
impl IntentClassifier for OpenAiIntentClassifier {
    async fn classify(&self, query: &str) -> Result<QueryIntent> {
        let output = self
            .client
            .extract_with_temperature::<ClassifierOutput>(
                &self.model,
                QUERY_SYSTEM_PROMPT,
                query,
                self.temperature,
            )
            .await
            .context("Intent classification call failed")?;

        Ok(output.into())
    }
}

/// Wire shape for the structured output call.
///
/// Strict-mode schemas cannot carry a free-form object, so the parameter
/// set is spelled out as the fields the prompt contract can produce; absent
/// fields are dropped when converting to the open `Params` map.
#[derive(Debug, Deserialize, JsonSchema)]
struct ClassifierOutput {
    intent: Intent,
    params: ClassifierParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ClassifierParams {
    question: Option<String>,
    period: Option<String>,
    days: Option<f64>,
    #[serde(rename = "type")]
    info_type: Option<String>,
    coin_symbol: Option<String>,
    influencer_twitter_user_name: Option<String>,
    sort_by: Option<String>,
}

impl From<ClassifierOutput> for QueryIntent {
    fn from(output: ClassifierOutput) -> Self {
        let p = output.params;
        let mut params = Params::new();

        let strings = [
            ("question", p.question),
            ("period", p.period),
            ("type", p.info_type),
            ("coinSymbol", p.coin_symbol),
            ("influencerTwitterUserName", p.influencer_twitter_user_name),
            ("sortBy", p.sort_by),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                params.insert(key.to_string(), Value::String(value));
            }
        }
        if let Some(days) = p.days {
            params.insert("days".to_string(), Value::from(days));
        }

        QueryIntent {
            intent: output.intent,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_output_drops_absent_params() {
        let raw = json!({
            "intent": "best_call",
            "params": {
                "question": null,
                "period": "week",
                "days": null,
                "type": null,
                "coinSymbol": "pepe",
                "influencerTwitterUserName": "cryptomanran",
                "sortBy": null
            }
        });

        let output: ClassifierOutput = serde_json::from_value(raw).unwrap();
        let query_intent: QueryIntent = output.into();

        assert_eq!(query_intent.intent, Intent::BestCall);
        assert_eq!(query_intent.params.get("period"), Some(&json!("week")));
        assert_eq!(query_intent.params.get("coinSymbol"), Some(&json!("pepe")));
        assert!(!query_intent.params.contains_key("question"));
        assert!(!query_intent.params.contains_key("sortBy"));
    }
}

//! Intent classification engine.
//!
//! Takes raw user text and resolves it to a validated (intent, params)
//! pair: phrase table first, then the durable cache, then the model. Every
//! failure path degrades to "no intent" so a malformed query or a model
//! outage can never surface as an error to the router.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{error, info};

use super::cache::QueryCache;
use super::classifier::IntentClassifier;
use super::intent::{Intent, Params};
use super::phrases::match_phrase;
use crate::period::DEFAULT_DAYS;

const MIN_DAYS: f64 = 1.0;
const MAX_DAYS: f64 = 30.0;

pub struct QueryProcessor {
    classifier: Arc<dyn IntentClassifier>,
    cache: Arc<QueryCache>,
}

impl QueryProcessor {
    pub fn new(classifier: Arc<dyn IntentClassifier>, cache: Arc<QueryCache>) -> Self {
        Self { classifier, cache }
    }

    /// Resolve a user query to an intent and parameter set.
    ///
    /// Returns `(None, {})` for empty input, irrelevant queries, and every
    /// classification failure. Never errors.
    pub async fn process_query(&self, query: &str) -> (Option<Intent>, Params) {
        let query = query.trim();
        if query.is_empty() {
            return (None, Params::new());
        }

        let (intent, params) = self.classify_query(query).await;

        info!(
            query = %query,
            intent = intent.map(|i| i.as_str()).unwrap_or("none"),
            params = %serde_json::Value::Object(params.clone()),
            "Query classified"
        );

        (intent, params)
    }

    async fn classify_query(&self, query: &str) -> (Option<Intent>, Params) {
        let cache_key = query.to_lowercase();

        if let Some((intent, params)) = self.cache.get(&cache_key).await {
            return (Some(intent), params);
        }

        if let Some((intent, params)) = match_phrase(&cache_key) {
            self.cache
                .put(cache_key, intent, params.clone())
                .await;
            return (Some(intent), params);
        }

        match self.classifier.classify(query).await {
            Ok(result) => {
                if result.intent == Intent::Irrelevant {
                    // Not cached: a paraphrase or model change may reclassify it later.
                    return (None, Params::new());
                }

                let mut params = result.params;
                clamp_days(&mut params);

                self.cache
                    .put(cache_key, result.intent, params.clone())
                    .await;

                (Some(result.intent), params)
            }
            Err(e) => {
                error!(error = %e, "Error in query classification");
                (None, Params::new())
            }
        }
    }
}

/// Clamp an extracted `days` parameter into [1, 30].
///
/// String values parse their leading numeric token before clamping and
/// default to 7 when nothing parses.
fn clamp_days(params: &mut Params) {
    let Some(value) = params.get("days") else {
        return;
    };

    let clamped = match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => number_value(f.clamp(MIN_DAYS, MAX_DAYS)),
            None => return,
        },
        Value::String(s) => s
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .map(|f| number_value(f.clamp(MIN_DAYS, MAX_DAYS)))
            .unwrap_or_else(|| json!(DEFAULT_DAYS)),
        _ => return,
    };

    params.insert("days".to_string(), clamped);
}

/// Store whole numbers as integers so cached params stay stable.
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 {
        json!(f as i64)
    } else {
        json!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::intent::QueryIntent;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClassifier {
        response: Option<QueryIntent>,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn returning(intent: Intent, params: Value) -> Self {
            Self {
                response: Some(QueryIntent {
                    intent,
                    params: serde_json::from_value(params).unwrap(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IntentClassifier for StubClassifier {
        async fn classify(&self, _query: &str) -> anyhow::Result<QueryIntent> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .ok_or_else(|| anyhow!("model unavailable"))
        }
    }

    async fn processor_with(
        classifier: Arc<StubClassifier>,
    ) -> (QueryProcessor, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(QueryCache::load(dir.path().join("cache.json")).await);
        (QueryProcessor::new(classifier, cache), dir)
    }

    #[tokio::test]
    async fn empty_input_returns_no_intent_without_model_call() {
        let classifier = Arc::new(StubClassifier::returning(Intent::TopKols, json!({})));
        let (processor, _dir) = processor_with(classifier.clone()).await;

        for input in ["", "   ", "\t\n"] {
            let (intent, params) = processor.process_query(input).await;
            assert!(intent.is_none());
            assert!(params.is_empty());
        }

        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn phrase_short_circuits_the_model() {
        let classifier = Arc::new(StubClassifier::returning(Intent::TopKols, json!({})));
        let (processor, _dir) = processor_with(classifier.clone()).await;

        let (intent, params) = processor.process_query("gm").await;
        assert_eq!(intent, Some(Intent::Greeting));
        assert!(params.is_empty());
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let classifier = Arc::new(StubClassifier::returning(
            Intent::TopGainers,
            json!({"period": "day"}),
        ));
        let (processor, _dir) = processor_with(classifier.clone()).await;

        let first = processor.process_query("Show me top gainers today").await;
        let second = processor.process_query("Show me top gainers today").await;

        assert_eq!(first, second);
        assert_eq!(classifier.call_count(), 1);
    }

    #[tokio::test]
    async fn cache_key_is_case_insensitive() {
        let classifier = Arc::new(StubClassifier::returning(
            Intent::TopMentions,
            json!({"period": "week"}),
        ));
        let (processor, _dir) = processor_with(classifier.clone()).await;

        processor.process_query("Trending tokens").await;
        processor.process_query("TRENDING TOKENS  ").await;

        assert_eq!(classifier.call_count(), 1);
    }

    #[tokio::test]
    async fn irrelevant_is_not_cached() {
        let classifier = Arc::new(StubClassifier::returning(Intent::Irrelevant, json!({})));
        let (processor, _dir) = processor_with(classifier.clone()).await;

        let (intent, params) = processor.process_query("wen moon").await;
        assert!(intent.is_none());
        assert!(params.is_empty());

        // A second identical call must hit the classifier again.
        processor.process_query("wen moon").await;
        assert_eq!(classifier.call_count(), 2);
    }

    #[tokio::test]
    async fn classifier_failure_resolves_to_no_intent() {
        let classifier = Arc::new(StubClassifier::failing());
        let (processor, _dir) = processor_with(classifier.clone()).await;

        let (intent, params) = processor.process_query("top kols this week").await;
        assert!(intent.is_none());
        assert!(params.is_empty());

        // Failures are not cached either.
        processor.process_query("top kols this week").await;
        assert_eq!(classifier.call_count(), 2);
    }

    #[tokio::test]
    async fn days_are_clamped_into_range() {
        for (raw, expected) in [
            (json!({"days": 500}), json!(30)),
            (json!({"days": 0}), json!(1)),
            (json!({"days": 12}), json!(12)),
            (json!({"days": "45 minutes"}), json!(30)),
            (json!({"days": "soon"}), json!(7)),
        ] {
            let classifier = Arc::new(StubClassifier::returning(Intent::TopGainers, raw));
            let (processor, _dir) = processor_with(classifier).await;

            let (intent, params) = processor.process_query("gains").await;
            assert_eq!(intent, Some(Intent::TopGainers));
            assert_eq!(params.get("days"), Some(&expected));
        }
    }

    #[test]
    fn fractional_days_stay_fractional_inside_range() {
        let mut params: Params = serde_json::from_value(json!({"days": "2.5 days"})).unwrap();
        clamp_days(&mut params);
        assert_eq!(params.get("days"), Some(&json!(2.5)));
    }
}

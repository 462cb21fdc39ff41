//! Natural-language query classification pipeline.
//!
//! Raw text flows through the phrase table, the durable cache, and finally
//! the model-backed classifier; the result is always a well-formed
//! (intent, params) pair.

pub mod cache;
pub mod classifier;
pub mod intent;
pub mod phrases;
pub mod processor;
pub mod prompt;

pub use cache::QueryCache;
pub use classifier::{IntentClassifier, OpenAiIntentClassifier};
pub use intent::{Intent, Params, QueryIntent};
pub use processor::QueryProcessor;

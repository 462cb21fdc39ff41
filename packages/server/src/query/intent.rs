//! Classified query intents.
//!
//! The intent vocabulary is a closed enum: a model response carrying any
//! other string fails deserialization and is treated as a classification
//! failure, so an unvalidated intent can never reach the dispatch layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Parameter map attached to a classified intent.
pub type Params = Map<String, Value>;

/// Supported operations a user query can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Trivial or nonsensical question, answered with a canned quip.
    StupidQuestion,
    /// Questions about the platform itself (launch, features, ...).
    PlatformInfo,
    /// Best performing tokens or multiple calls over a window.
    TopGainers,
    /// Most mentioned / trending tokens over a window.
    TopMentions,
    /// Top performing influencers over a window.
    TopKols,
    /// A single influencer call, optionally filtered by token or username.
    BestCall,
    /// Canned greeting, produced by the phrase table only.
    Greeting,
    /// Off-topic input; never cached, never dispatched.
    Irrelevant,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::StupidQuestion => "stupid_question",
            Intent::PlatformInfo => "platform_info",
            Intent::TopGainers => "top_gainers",
            Intent::TopMentions => "top_mentions",
            Intent::TopKols => "top_kols",
            Intent::BestCall => "best_call",
            Intent::Greeting => "greeting",
            Intent::Irrelevant => "irrelevant",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured classification result returned by the model substrate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QueryIntent {
    /// The classified intent of the query.
    pub intent: Intent,
    /// Parameters extracted from the query.
    #[serde(default)]
    pub params: Params,
}

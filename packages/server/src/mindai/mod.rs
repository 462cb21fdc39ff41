//! Upstream analytics integration: client, aggregation, formatting.

pub mod client;
pub mod dispatch;
pub mod formatting;
pub mod service;
pub mod stats;
pub mod types;

pub use client::{MindAiClient, MindAiError};
pub use dispatch::dispatch_query;
pub use service::MindAiService;
pub use types::*;

//! KOL analytics bot backend.
//!
//! Classifies natural-language user queries into typed intents, aggregates
//! upstream influencer analytics, and renders bot-ready messages.

pub mod alpha;
pub mod config;
pub mod mindai;
pub mod period;
pub mod query;
pub mod server;

pub use config::Config;

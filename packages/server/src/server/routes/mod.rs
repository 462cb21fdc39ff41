//! HTTP route handlers.

pub mod alpha;
pub mod analytics;
pub mod health;
pub mod query;

pub use alpha::{dequeue_alpha_handler, enqueue_alpha_handler};
pub use analytics::{
    top_gainers_handler, top_mentioned_tokens_handler, top_performing_kols_handler,
};
pub use health::health_handler;
pub use query::{process_query_handler, query_message_handler};

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Error body shared by all routes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    detail: impl Into<String>,
) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

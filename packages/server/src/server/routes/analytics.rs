//! Analytics endpoints returning formatted bot messages plus typed data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use super::{error_response, ErrorBody};
use crate::mindai::{
    MindAiError, TopGainersResponse, TopMentionedTokensResponse, TopPerformingResponse,
};
use crate::period::Period;
use crate::server::app::AppState;

type RouteError = (StatusCode, Json<ErrorBody>);

fn parse_period(label: &str) -> Result<Period, RouteError> {
    Period::from_label(label).ok_or_else(|| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!(
                "Invalid period '{}'; expected one of day, week, twoWeek, threeWeek, month",
                label
            ),
        )
    })
}

fn upstream_error(e: MindAiError) -> RouteError {
    error!(error = %e, "Upstream analytics request failed");
    error_response(
        StatusCode::BAD_GATEWAY,
        format!("External API error: {}", e),
    )
}

/// `GET /top-performing-kols/{period}`
pub async fn top_performing_kols_handler(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<TopPerformingResponse>, RouteError> {
    let period = parse_period(&period)?;
    state
        .mindai
        .top_performing_kols(period)
        .await
        .map(Json)
        .map_err(upstream_error)
}

/// `GET /top-gainers/{period}`
pub async fn top_gainers_handler(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<TopGainersResponse>, RouteError> {
    let period = parse_period(&period)?;
    state
        .mindai
        .top_gainers(period)
        .await
        .map(Json)
        .map_err(upstream_error)
}

/// `GET /top-mentioned-tokens/{period}`
pub async fn top_mentioned_tokens_handler(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<TopMentionedTokensResponse>, RouteError> {
    let period = parse_period(&period)?;
    state
        .mindai
        .top_mentioned_tokens(period)
        .await
        .map(Json)
        .map_err(upstream_error)
}

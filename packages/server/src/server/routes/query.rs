//! Query classification and dispatch endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{error_response, ErrorBody};
use crate::mindai::dispatch_query;
use crate::query::{Intent, Params};
use crate::server::app::AppState;

/// Body for `POST /process_query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessQueryResult {
    pub intent: Intent,
    pub params: Params,
}

/// Classify a raw user query into an intent and parameter set.
///
/// Returns 400 when the query resolves to no intent; the classifier itself
/// never errors.
pub async fn process_query_handler(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<ProcessQueryResult>, (StatusCode, Json<ErrorBody>)> {
    let (intent, params) = state.processor.process_query(&request.query).await;

    match intent {
        Some(intent) => Ok(Json(ProcessQueryResult { intent, params })),
        None => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Query could not be processed",
        )),
    }
}

/// Body for `POST /query_message`: an already-classified query.
#[derive(Debug, Deserialize)]
pub struct QueryPayload {
    pub query_type: Intent,
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, Serialize)]
pub struct ProcessQueryResponse {
    pub message: String,
}

/// Render the bot message for a resolved (intent, params) pair.
pub async fn query_message_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryPayload>,
) -> Result<Json<ProcessQueryResponse>, (StatusCode, Json<ErrorBody>)> {
    match dispatch_query(&state.mindai, payload.query_type, &payload.params).await {
        Ok(message) => Ok(Json(ProcessQueryResponse { message })),
        Err(e) => {
            error!(error = %e, intent = %payload.query_type, "Error in query dispatch");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request.",
            ))
        }
    }
}

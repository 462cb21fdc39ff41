//! Alpha-view queue endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use super::{error_response, ErrorBody};
use crate::alpha::{QueuedTokenAlert, TokenAlert};
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct EnqueueResponse {
    pub status: String,
    pub message: String,
}

/// `POST /alpha/enqueue`
pub async fn enqueue_alpha_handler(
    State(state): State<AppState>,
    Json(alert): Json<TokenAlert>,
) -> Result<Json<EnqueueResponse>, (StatusCode, Json<ErrorBody>)> {
    match state.alpha_queue.enqueue(alert).await {
        Ok(()) => Ok(Json(EnqueueResponse {
            status: "success".to_string(),
            message: "Data enqueued successfully".to_string(),
        })),
        Err(e) => {
            error!(error = %e, "Failed to enqueue token alert");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            ))
        }
    }
}

/// `GET /alpha/dequeue`
pub async fn dequeue_alpha_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QueuedTokenAlert>>, (StatusCode, Json<ErrorBody>)> {
    match state.alpha_queue.dequeue_all().await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            error!(error = %e, "Failed to drain token alert queue");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            ))
        }
    }
}

//! The trigger endpoint: always fails, demonstrating the local error boundary.

use axum::{Json, body::Bytes, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::simulation;

/// Trigger request. The input is logged for demonstration only; it has no
/// effect on control flow.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    pub simulated_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub message: String,
}

/// POST `/api/error/trigger`.
///
/// The body is parsed leniently: a missing, empty, or malformed body falls
/// back to a sentinel input. A `Json` extractor would reject bad bodies with
/// a 4xx before the handler runs, which would break the contract that every
/// request takes the error path.
pub async fn trigger_error(body: Bytes) -> Result<(StatusCode, Json<TriggerResponse>), AppError> {
    let payload: Option<TriggerRequest> = serde_json::from_slice(&body).ok();
    let simulated_input = payload
        .and_then(|p| p.simulated_input)
        .unwrap_or_else(|| "null".to_string());

    tracing::info!(%simulated_input, "received request to trigger error");

    // Forced failure: divide by zero, handled by the local boundary.
    let _quotient = simulation::divide(1, 0)?;

    // Unreachable while the simulated operation is hardwired to fail.
    Ok((
        StatusCode::OK,
        Json(TriggerResponse {
            message: "This should not be reached if an error occurs.".to_string(),
        }),
    ))
}

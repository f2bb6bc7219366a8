use std::backtrace::Backtrace;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::simulation::SimulationError;

/// Generic message for errors handled by a route-local boundary.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please try again later.";

/// Generic message for errors that escape local handling and are caught by
/// the global fallback boundary.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "An unexpected internal server error occurred. Please contact support if the issue persists.";

/// Marker attached to responses produced by a local error boundary, so the
/// global fallback does not rewrap an already-sanitized 500.
#[derive(Debug, Clone, Copy)]
pub struct SanitizedError;

/// Client-visible error body. The single `message` field is all that ever
/// crosses the process boundary.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full detail stays on the server side: error chain plus a captured
        // backtrace go to the log sink, the client gets the fixed message.
        let backtrace = Backtrace::force_capture();
        tracing::error!(
            error = %self,
            %backtrace,
            "error during request processing; returning sanitized response"
        );

        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(SanitizedError);
        response
    }
}

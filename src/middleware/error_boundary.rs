//! Global fallback error boundary.
//!
//! Catches whatever escapes the route-local boundaries: panics unwinding out
//! of a handler, and 500 responses produced by the framework itself. Either
//! way the full detail is logged internally and the client receives the
//! fallback generic message.

use std::any::Any;
use std::backtrace::Backtrace;

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{HeaderValue, Response, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};

use crate::error::{ErrorBody, FALLBACK_ERROR_MESSAGE, SanitizedError};

/// Panic-to-response conversion for `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    let backtrace = Backtrace::force_capture();
    tracing::error!(
        panic = %detail,
        %backtrace,
        "unhandled panic while serving request; returning fallback response"
    );

    fallback_response()
}

/// Replaces any 500 response that was not produced by a local boundary with
/// the sanitized fallback response. Local boundaries mark their responses
/// with the [`SanitizedError`] extension.
pub async fn sanitize_server_errors(req: Request, next: Next) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    if response.status() == StatusCode::INTERNAL_SERVER_ERROR
        && response.extensions().get::<SanitizedError>().is_none()
    {
        tracing::error!(
            %method,
            %uri,
            "unhandled server error response; replacing body with generic message"
        );
        return fallback_response();
    }

    response
}

/// The global boundary may bypass the regular CORS layer, so the permissive
/// headers are attached explicitly here.
fn fallback_response() -> axum::response::Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    response
}

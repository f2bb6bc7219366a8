use axum::{
    Router,
    http::header,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultOnFailure, TraceLayer},
};
use tracing::Level;

use crate::handlers::{health_check, trigger_error};
use crate::middleware::{handle_panic, sanitize_server_errors};

/// Application routes without any middleware applied.
pub fn api_routes() -> Router {
    Router::new()
        .route("/api/error/trigger", post(trigger_error))
        .route("/health", get(health_check))
}

/// Wraps a router with the cross-cutting layers: permissive CORS, request
/// tracing, and the global error boundary (500 sanitizer plus panic catcher,
/// outermost so nothing escapes it).
pub fn with_error_boundary(router: Router) -> Router {
    router
        // In a real deployment the allowed origins would be enumerated; the
        // wildcard is a development default for cross-port frontends.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
        // Every 500 here is already logged with full detail by a boundary;
        // keep the trace layer's own failure event below ERROR so the sink
        // sees exactly one entry per failed request.
        .layer(
            TraceLayer::new_for_http()
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        .layer(from_fn(sanitize_server_errors))
        .layer(CatchPanicLayer::custom(handle_panic))
}

pub fn build_router() -> Router {
    with_error_boundary(api_routes())
}

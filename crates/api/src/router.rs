//! The Planboard HTTP application: `/health` plus the `/api` resource tree,
//! wrapped in the middleware every request passes through. The binary and
//! the integration tests both build it here.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id, generated when the client sends none.
const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Methods the browser client uses against the resource routes.
const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the application [`Router`].
///
/// Outermost first, a request passes CORS, gets an `x-request-id`, is
/// traced, and runs under the configured timeout; a panicking handler
/// becomes a 500. The request id is copied onto every response.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        // Health check at root level (not under /api).
        .merge(routes::health::router())
        // Projects, tasks and reference lists.
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the configured browser origins.
///
/// Any request header is accepted (the preflight's requested headers are
/// echoed back), so clients may send `x-request-id` alongside
/// `content-type`. Origins were checked when the configuration was loaded;
/// any that still fail to parse are skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

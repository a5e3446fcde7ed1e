//! HTTP REST API routes

pub mod error;
mod extract;
mod image_routes;
mod scene_routes;
mod style_context_routes;

use axum::{
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::domain::value_objects::{InvalidSessionId, SessionId};
use crate::infrastructure::http::error::ApiResult;
use crate::infrastructure::state::AppState;

/// Header clients may use instead of a `sessionId` body/query field
pub const SESSION_HEADER: &str = "x-session-id";

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Scene routes
        .route("/generate-scene", post(scene_routes::generate_scene))
        .route(
            "/generate-next-scene",
            post(scene_routes::generate_next_scene),
        )
        // Image routes
        .route("/generate-image", post(image_routes::generate_image))
        // Session / style context routes
        .route("/sessions", post(style_context_routes::create_session))
        .route(
            "/style-context",
            get(style_context_routes::get_style_context)
                .delete(style_context_routes::reset_style_context),
        )
}

/// Build the full application with middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Pick the session for a request: explicit field, then header, then the shared session
///
/// A malformed id is an error wherever it comes from; only blank ones fall through.
pub fn resolve_session(explicit: Option<&str>, headers: &HeaderMap) -> ApiResult<SessionId> {
    if let Some(session) = explicit.map(SessionId::parse).transpose()?.flatten() {
        return Ok(session);
    }

    let from_header = match headers.get(SESSION_HEADER) {
        Some(value) => SessionId::parse(value.to_str().map_err(|_| InvalidSessionId)?)?,
        None => None,
    };
    Ok(from_header.unwrap_or_else(SessionId::shared))
}

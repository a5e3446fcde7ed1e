//! Session and style context routes

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::application::dto::{SessionQueryDto, SessionResponseDto, StyleContextResponseDto};
use crate::application::ports::outbound::StyleContextRepositoryPort;
use crate::domain::value_objects::SessionId;
use crate::infrastructure::http::error::ApiResult;
use crate::infrastructure::http::resolve_session;
use crate::infrastructure::state::AppState;

/// Mint a fresh session id for a client
pub async fn create_session() -> Json<SessionResponseDto> {
    let session = SessionId::new();
    tracing::debug!(session = %session, "Session created");
    Json(SessionResponseDto {
        session_id: session.to_string(),
    })
}

/// Current style context of a session
pub async fn get_style_context(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQueryDto>,
) -> ApiResult<Json<StyleContextResponseDto>> {
    let session = resolve_session(query.session_id.as_deref(), &headers)?;
    let context = state.style_contexts.get(&session).await;
    Ok(Json(StyleContextResponseDto::new(&session, context)))
}

/// Forget a session's style context
pub async fn reset_style_context(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQueryDto>,
) -> ApiResult<StatusCode> {
    let session = resolve_session(query.session_id.as_deref(), &headers)?;
    state.style_contexts.reset(&session).await;
    tracing::info!(session = %session, "Style context reset");
    Ok(StatusCode::NO_CONTENT)
}

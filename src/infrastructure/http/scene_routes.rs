//! Scene breakdown routes

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::application::dto::{GenerateSceneRequestDto, NextSceneRequestDto, SceneDto};
use crate::domain::value_objects::Teaser;
use crate::infrastructure::http::error::ApiResult;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::resolve_session;
use crate::infrastructure::state::AppState;

/// Break a teaser down into scene fields, gated on it reading as a story
pub async fn generate_scene(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<GenerateSceneRequestDto>,
) -> ApiResult<Json<SceneDto>> {
    let teaser = Teaser::parse(req.teaser.as_deref().unwrap_or_default())?;
    let session = resolve_session(req.session_id.as_deref(), &headers)?;

    let scene = state
        .scene_service
        .generate_scene(&session, &teaser, req.override_classification)
        .await?;

    Ok(Json(scene.into()))
}

/// Continue from a previous teaser; the story gate does not apply
pub async fn generate_next_scene(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<NextSceneRequestDto>,
) -> ApiResult<Json<SceneDto>> {
    let previous = Teaser::parse(req.teaser.as_deref().unwrap_or_default())?;
    let session = resolve_session(req.session_id.as_deref(), &headers)?;

    let scene = state
        .scene_service
        .generate_next_scene(&session, &previous)
        .await?;

    Ok(Json(scene.into()))
}

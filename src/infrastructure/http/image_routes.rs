//! Image generation routes

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::application::dto::{GenerateImageRequestDto, ImageResponseDto};
use crate::infrastructure::http::error::ApiResult;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::resolve_session;
use crate::infrastructure::state::AppState;

/// Generate images for a prompt, styled by the session's context
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<GenerateImageRequestDto>,
) -> ApiResult<Json<ImageResponseDto>> {
    let session = resolve_session(req.session_id.as_deref(), &headers)?;

    let images = state
        .image_service
        .generate_images(&session, &req.prompt_source())
        .await?;

    Ok(Json(ImageResponseDto { images }))
}

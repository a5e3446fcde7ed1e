//! HTTP error type
//!
//! Every failure leaves the API as a JSON body with an `error` message.
//! Upstream details are logged here and never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::services::{ImageServiceError, SceneServiceError};
use crate::domain::value_objects::{InvalidSessionId, TeaserError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input failed validation
    #[error("{0}")]
    BadRequest(String),

    /// The story gate said no; the caller may retry with `override`
    #[error("Teaser not recognized as story.")]
    NotAStory { classification: String },

    /// The model API failed; `message` is what the client sees
    #[error("{message}")]
    Upstream {
        message: &'static str,
        detail: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::NotAStory { classification } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "type": classification,
                    "allowOverride": true,
                }),
            ),
            ApiError::Upstream { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<TeaserError> for ApiError {
    fn from(error: TeaserError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<InvalidSessionId> for ApiError {
    fn from(error: InvalidSessionId) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

/// Unparseable bodies and missing content types are caller errors too
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<SceneServiceError> for ApiError {
    fn from(error: SceneServiceError) -> Self {
        match error {
            SceneServiceError::NotAStory(classification) => ApiError::NotAStory {
                classification: classification.label().to_string(),
            },
            SceneServiceError::Llm(e) => ApiError::Upstream {
                message: "Scene generation failed.",
                detail: e.to_string(),
            },
        }
    }
}

impl From<ImageServiceError> for ApiError {
    fn from(error: ImageServiceError) -> Self {
        match error {
            ImageServiceError::InvalidPrompt => {
                ApiError::BadRequest(ImageServiceError::InvalidPrompt.to_string())
            }
            ImageServiceError::Generation(e) => ApiError::Upstream {
                message: "Image generation failed.",
                detail: e.to_string(),
            },
        }
    }
}

//! Request body extractor that answers malformed input with the API's JSON errors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::infrastructure::http::error::ApiError;

/// `Json<T>` whose rejections (bad syntax, wrong types, missing
/// `Content-Type`) surface as `400 {error}` instead of axum's plain text
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

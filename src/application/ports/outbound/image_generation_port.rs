//! Image generation port - text-to-image against a hosted model

use async_trait::async_trait;

/// Number of images requested per generation
pub const IMAGE_COUNT: u8 = 4;
/// Resolution requested per image
pub const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub count: u8,
    pub size: String,
}

impl ImageRequest {
    /// Request with the fixed count and size
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            count: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageGenerationError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    /// Generate images and return their URLs in provider order
    async fn generate_images(&self, request: ImageRequest) -> Result<Vec<String>, ImageGenerationError>;
}

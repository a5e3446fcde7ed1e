//! Image Service - styled image generation for a scene

use std::sync::Arc;

use crate::application::ports::outbound::{
    ImageGenerationError, ImageGenerationPort, ImageRequest, StyleContextRepositoryPort,
    IMAGE_COUNT,
};
use crate::application::services::llm::build_image_prompt;
use crate::domain::entities::SceneRecord;
use crate::domain::value_objects::SessionId;

/// Prompts shorter than this (in characters, after trimming) are rejected
pub const MIN_IMAGE_PROMPT_CHARS: usize = 5;

/// What the caller described the image with
#[derive(Debug, Clone)]
pub enum ImagePromptSource {
    /// Free text, usually the edited scene lines rendered by the client
    Text(String),
    /// Structured scene fields, rendered to labeled lines here
    Scene(SceneRecord),
}

impl ImagePromptSource {
    /// The base prompt, before the style context is appended
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Scene(scene) => scene.to_labeled_lines().trim().to_string(),
        }
    }

    /// Length of what the caller actually wrote; scene labels do not count
    pub fn content_chars(&self) -> usize {
        match self {
            Self::Text(text) => text.trim().chars().count(),
            Self::Scene(scene) => scene.description().chars().count(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageServiceError {
    #[error("Valid image prompt required.")]
    InvalidPrompt,
    #[error("Image generation error: {0}")]
    Generation(#[from] ImageGenerationError),
}

/// Service for generating scene images
pub struct ImageService {
    images: Arc<dyn ImageGenerationPort>,
    style_contexts: Arc<dyn StyleContextRepositoryPort>,
}

impl ImageService {
    pub fn new(
        images: Arc<dyn ImageGenerationPort>,
        style_contexts: Arc<dyn StyleContextRepositoryPort>,
    ) -> Self {
        Self {
            images,
            style_contexts,
        }
    }

    /// Compose the styled prompt for a session without generating anything
    pub async fn compose_prompt(
        &self,
        session: &SessionId,
        source: &ImagePromptSource,
    ) -> Result<String, ImageServiceError> {
        if source.content_chars() < MIN_IMAGE_PROMPT_CHARS {
            return Err(ImageServiceError::InvalidPrompt);
        }
        let base = source.render();

        let style = self.style_contexts.get(session).await;
        if style.is_empty() {
            tracing::debug!(session = %session, "No style context yet for session");
        }
        Ok(build_image_prompt(&base, &style))
    }

    /// Generate images for a prompt, biased by the session's style context
    pub async fn generate_images(
        &self,
        session: &SessionId,
        source: &ImagePromptSource,
    ) -> Result<Vec<String>, ImageServiceError> {
        let prompt = self.compose_prompt(session, source).await?;
        tracing::debug!(session = %session, prompt = %prompt, "Styled image prompt");

        let urls = self.images.generate_images(ImageRequest::new(prompt)).await?;
        if urls.len() != usize::from(IMAGE_COUNT) {
            tracing::warn!(
                expected = IMAGE_COUNT,
                received = urls.len(),
                "Image count differs from request"
            );
        }
        tracing::info!(count = urls.len(), "Images generated");

        Ok(urls)
    }
}

//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::{
    ImageGenerationPort, LlmPort, StyleContextRepositoryPort,
};
use crate::application::services::{ImageService, SceneService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::style_context_store::InMemoryStyleContextStore;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Per-session style contexts
    pub style_contexts: Arc<dyn StyleContextRepositoryPort>,
    // Application services
    pub scene_service: SceneService,
    pub image_service: ImageService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(OpenAiClient::new(
            &config.openai_base_url,
            &config.openai_api_key,
            &config.chat_model,
            &config.image_model,
        ));

        let style_contexts = Arc::new(InMemoryStyleContextStore::with_capacity(
            config.style_context_capacity,
        ));

        Self::with_adapters(config, client.clone(), client, style_contexts)
    }

    /// Wire the services onto explicit adapters
    pub fn with_adapters(
        config: AppConfig,
        llm: Arc<dyn LlmPort>,
        images: Arc<dyn ImageGenerationPort>,
        style_contexts: Arc<dyn StyleContextRepositoryPort>,
    ) -> Self {
        let scene_service = SceneService::new(llm, style_contexts.clone());
        let image_service = ImageService::new(images, style_contexts.clone());

        Self {
            config,
            style_contexts,
            scene_service,
            image_service,
        }
    }
}

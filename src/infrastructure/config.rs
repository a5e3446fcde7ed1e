//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer credential for the model API
    pub openai_api_key: String,
    /// Model API base URL (OpenAI-compatible)
    pub openai_base_url: String,
    /// Model used for classification and scene breakdowns
    pub chat_model: String,
    /// Model used for image generation
    pub image_model: String,
    /// Most sessions whose style context is kept in memory
    pub style_context_capacity: usize,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY environment variable is required")?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            image_model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-2".to_string()),
            style_context_capacity: env::var("STYLE_CONTEXT_CAPACITY")
                .unwrap_or_else(|_| "1024".to_string())
                .parse()
                .context("STYLE_CONTEXT_CAPACITY must be a positive integer")?,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

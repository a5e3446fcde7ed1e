//! LLM port - chat completion against a hosted language model

use async_trait::async_trait;

/// A completion request, sent as a single user message
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub prompt: String,
    /// Sampling temperature; `None` leaves it to the provider default
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Raw model reply
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    /// Model that actually answered, as reported by the provider
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

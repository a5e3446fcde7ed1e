//! Outbound ports - Interfaces that the application requires from external systems

mod image_generation_port;
mod llm_port;
mod style_context_port;

#[allow(unused_imports)]
pub use image_generation_port::{
    ImageGenerationError, ImageGenerationPort, ImageRequest, IMAGE_COUNT, IMAGE_SIZE,
};
#[allow(unused_imports)]
pub use llm_port::{LlmError, LlmPort, LlmRequest, LlmResponse};
pub use style_context_port::StyleContextRepositoryPort;

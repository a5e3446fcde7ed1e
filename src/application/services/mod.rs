//! Application services - Use case implementations
//!
//! Each service takes its outbound ports as trait objects so the HTTP layer
//! and tests can swap the model API for something else.

pub mod classification_service;
pub mod image_service;
pub mod llm;
pub mod scene_service;

#[allow(unused_imports)]
pub use classification_service::{ClassificationService, GateDecision};
#[allow(unused_imports)]
pub use image_service::{ImagePromptSource, ImageService, ImageServiceError, MIN_IMAGE_PROMPT_CHARS};
pub use scene_service::{SceneService, SceneServiceError};

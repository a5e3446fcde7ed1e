//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes and error responses
//! - OpenAI: chat completion and image generation client
//! - Style context store: in-memory per-session storage
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod openai;
pub mod state;
pub mod style_context_store;

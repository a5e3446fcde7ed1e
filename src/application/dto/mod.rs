//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP layer can
//! serialize/deserialize without pulling serde into the domain model.

pub mod image;
pub mod scene;
pub mod style_context;

pub use image::*;
pub use scene::*;
pub use style_context::*;

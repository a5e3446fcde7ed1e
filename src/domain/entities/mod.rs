//! Domain entities - Core business objects

mod scene;

pub use scene::{SceneField, SceneRecord};

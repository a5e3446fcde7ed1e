//! Style context - visual bias carried from a scene breakdown into image prompts

use chrono::{DateTime, Utc};

use crate::domain::entities::SceneRecord;

/// Palette used when the mood mentions darkness
pub const DARK_PALETTE: &str = "muted shadows";
/// Palette used otherwise
pub const NATURAL_PALETTE: &str = "natural tones";

/// Derived style fields for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleContext {
    pub character_design: String,
    pub color_palette: String,
    pub camera_style: String,
    /// When the context was last derived from a scene; `None` while still empty
    pub updated_at: Option<DateTime<Utc>>,
}

impl StyleContext {
    /// Derive a style context from a freshly parsed scene
    pub fn from_scene(scene: &SceneRecord, now: DateTime<Utc>) -> Self {
        Self {
            character_design: scene.characters.clone(),
            color_palette: palette_for_mood(&scene.mood).to_string(),
            camera_style: scene.camera.clone(),
            updated_at: Some(now),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// Pick a palette from the mood text (case-insensitive "dark" check)
pub fn palette_for_mood(mood: &str) -> &'static str {
    if mood.to_lowercase().contains("dark") {
        DARK_PALETTE
    } else {
        NATURAL_PALETTE
    }
}

use serde::{Deserialize, Serialize};

use crate::application::dto::SceneDto;
use crate::application::services::ImagePromptSource;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequestDto {
    /// Free-text prompt; takes precedence over `scene`
    #[serde(default)]
    pub prompt: Option<String>,
    /// Edited scene fields, rendered server-side when no prompt is given
    #[serde(default)]
    pub scene: Option<SceneDto>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl GenerateImageRequestDto {
    pub fn prompt_source(&self) -> ImagePromptSource {
        match (&self.prompt, &self.scene) {
            (Some(prompt), _) => ImagePromptSource::Text(prompt.clone()),
            (None, Some(scene)) => ImagePromptSource::Scene(scene.clone().into()),
            (None, None) => ImagePromptSource::Text(String::new()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponseDto {
    pub images: Vec<String>,
}

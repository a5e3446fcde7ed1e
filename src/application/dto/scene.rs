use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entities::SceneRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSceneRequestDto {
    #[serde(default)]
    pub teaser: Option<String>,
    /// Skip the story gate; only a literal `true` counts
    #[serde(default, rename = "override", deserialize_with = "only_true")]
    pub override_classification: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

fn only_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSceneRequestDto {
    /// The teaser of the scene being continued
    #[serde(default)]
    pub teaser: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The five scene fields; every key is always present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDto {
    pub characters: String,
    pub setting: String,
    pub mood: String,
    pub camera: String,
    pub actions: String,
}

impl From<SceneRecord> for SceneDto {
    fn from(scene: SceneRecord) -> Self {
        Self {
            characters: scene.characters,
            setting: scene.setting,
            mood: scene.mood,
            camera: scene.camera,
            actions: scene.actions,
        }
    }
}

impl From<SceneDto> for SceneRecord {
    fn from(dto: SceneDto) -> Self {
        Self {
            characters: dto.characters,
            setting: dto.setting,
            mood: dto.mood,
            camera: dto.camera,
            actions: dto.actions,
        }
    }
}

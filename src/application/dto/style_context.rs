use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SessionId, StyleContext};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQueryDto {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseDto {
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleContextResponseDto {
    pub session_id: String,
    pub character_design: String,
    pub color_palette: String,
    pub camera_style: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StyleContextResponseDto {
    pub fn new(session: &SessionId, context: StyleContext) -> Self {
        Self {
            session_id: session.to_string(),
            character_design: context.character_design,
            color_palette: context.color_palette,
            camera_style: context.camera_style,
            updated_at: context.updated_at,
        }
    }
}

//! Scene entity - Five-field breakdown of a teaser

/// One of the five labeled fields of a scene breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneField {
    Characters,
    Setting,
    Mood,
    Camera,
    Actions,
}

impl SceneField {
    /// All fields, in the order they are requested from the model and shown to users
    pub const ALL: [SceneField; 5] = [
        Self::Characters,
        Self::Setting,
        Self::Mood,
        Self::Camera,
        Self::Actions,
    ];

    /// Human-facing label, as it appears in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Characters => "Characters",
            Self::Setting => "Setting",
            Self::Mood => "Mood",
            Self::Camera => "Camera",
            Self::Actions => "Actions",
        }
    }

    /// Look a field up by its label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(label))
    }
}

/// A scene breakdown
///
/// Always carries all five fields. A field the model did not supply is
/// an empty string, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneRecord {
    pub characters: String,
    pub setting: String,
    pub mood: String,
    pub camera: String,
    pub actions: String,
}

impl SceneRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: SceneField) -> &str {
        match field {
            SceneField::Characters => &self.characters,
            SceneField::Setting => &self.setting,
            SceneField::Mood => &self.mood,
            SceneField::Camera => &self.camera,
            SceneField::Actions => &self.actions,
        }
    }

    pub fn set(&mut self, field: SceneField, value: impl Into<String>) {
        let slot = match field {
            SceneField::Characters => &mut self.characters,
            SceneField::Setting => &mut self.setting,
            SceneField::Mood => &mut self.mood,
            SceneField::Camera => &mut self.camera,
            SceneField::Actions => &mut self.actions,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: SceneField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields the model left empty
    pub fn missing_fields(&self) -> Vec<SceneField> {
        SceneField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Non-blank field values joined by spaces, without labels
    pub fn description(&self) -> String {
        SceneField::ALL
            .iter()
            .map(|field| self.get(*field).trim())
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as five `Label: value` lines
    pub fn to_labeled_lines(&self) -> String {
        SceneField::ALL
            .iter()
            .map(|field| format!("{}: {}", field.label(), self.get(*field)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

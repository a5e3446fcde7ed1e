//! Prompt construction for the classification, breakdown and image calls

use crate::domain::entities::SceneField;
use crate::domain::value_objects::{StyleContext, Teaser};

/// Closed-label classification prompt
pub fn build_classification_prompt(teaser: &Teaser) -> String {
    format!(
        "Classify this teaser using one of these labels only:\n\
        - story\n\
        - non-story\n\
        - unclear\n\
        \n\
        Teaser: \"{}\"",
        teaser
    )
}

/// Yes/no follow-up for teasers the classifier was unsure about
pub fn build_relevance_prompt(teaser: &Teaser) -> String {
    format!(
        "Does this teaser describe a cinematic story scene? Answer yes or no only.\n\n\"{}\"",
        teaser
    )
}

/// Structured-output prompt asking for the five labeled lines
pub fn build_scene_breakdown_prompt(teaser: &Teaser) -> String {
    let mut prompt = String::from(
        "You are a scene breakdown parser. Format the following teaser using exactly five labeled fields:\n\n",
    );

    for field in SceneField::ALL {
        prompt.push_str(&format!("{}: [{}]\n", field.label(), field_hint(field)));
    }

    prompt.push_str("\nOnly reply with those five labeled lines.\n\n");
    prompt.push_str(&format!("Teaser: \"{}\"", teaser));
    prompt
}

fn field_hint(field: SceneField) -> &'static str {
    match field {
        SceneField::Characters => "Who is present",
        SceneField::Setting => "Where the scene takes place",
        SceneField::Mood => "Emotional tone",
        SceneField::Camera => "Suggested camera angle/style",
        SceneField::Actions => "Key movements or events",
    }
}

/// Append the session's style context to an image prompt
///
/// The "Visual Consistency" block is always present, even while the
/// context is still empty.
pub fn build_image_prompt(prompt: &str, style: &StyleContext) -> String {
    format!(
        "{}\n\n\
        Visual Consistency:\n\
        Character Design: {}\n\
        Color Palette: {}\n\
        Camera Style: {}",
        prompt.trim(),
        style.character_design,
        style.color_palette,
        style.camera_style,
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::entities::SceneRecord;

    fn teaser() -> Teaser {
        Teaser::parse("A girl stands alone on a rainy rooftop at night.").unwrap()
    }

    #[test]
    fn test_classification_prompt_lists_labels() {
        let prompt = build_classification_prompt(&teaser());

        assert!(prompt.starts_with("Classify this teaser using one of these labels only:"));
        assert!(prompt.contains("- story\n- non-story\n- unclear"));
        assert!(prompt.ends_with("Teaser: \"A girl stands alone on a rainy rooftop at night.\""));
    }

    #[test]
    fn test_relevance_prompt() {
        let prompt = build_relevance_prompt(&teaser());
        assert!(prompt.contains("Answer yes or no only."));
        assert!(prompt.contains("\"A girl stands alone"));
    }

    #[test]
    fn test_scene_prompt_requests_fields_in_order() {
        let prompt = build_scene_breakdown_prompt(&teaser());

        let positions: Vec<usize> = SceneField::ALL
            .iter()
            .map(|field| prompt.find(&format!("{}: [", field.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(prompt.contains("Only reply with those five labeled lines."));
    }

    #[test]
    fn test_image_prompt_appends_visual_consistency() {
        let scene = SceneRecord {
            characters: "A lone girl".to_string(),
            mood: "Dark and rainy".to_string(),
            camera: "Wide shot".to_string(),
            ..SceneRecord::default()
        };
        let style = StyleContext::from_scene(&scene, Utc::now());

        let prompt = build_image_prompt("  Characters: A lone girl\nSetting: Rooftop \n", &style);

        assert_eq!(
            prompt,
            "Characters: A lone girl\nSetting: Rooftop\n\n\
            Visual Consistency:\n\
            Character Design: A lone girl\n\
            Color Palette: muted shadows\n\
            Camera Style: Wide shot"
        );
    }

    #[test]
    fn test_image_prompt_with_empty_style() {
        let prompt = build_image_prompt("A quiet harbor at dawn", &StyleContext::default());

        assert!(prompt.contains("Visual Consistency:\nCharacter Design: \nColor Palette: \nCamera Style:"));
        // Trailing whitespace of the block is trimmed away
        assert!(prompt.ends_with("Camera Style:"));
    }
}

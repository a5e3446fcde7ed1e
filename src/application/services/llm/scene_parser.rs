//! Best-effort extraction of a scene breakdown from free-form model text
//!
//! The model is asked for five `Label: value` lines but is free to add
//! prose, reorder lines or skip fields. Parsing never fails: lines that
//! don't look like a known label are ignored, a repeated label overwrites
//! the earlier value, and a missing label leaves its field empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{SceneField, SceneRecord};

/// `Label: value` or `Label - value`, label case-insensitive
const LABELED_LINE_PATTERN: &str = r"(?i)^\s*(characters|setting|mood|camera|actions)\s*[:-]\s*(.+)$";

static LABELED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LABELED_LINE_PATTERN).expect("valid regex"));

/// Parse a raw model reply into a [`SceneRecord`]
pub fn parse_scene_breakdown(raw: &str) -> SceneRecord {
    let mut record = SceneRecord::new();

    for line in raw.lines() {
        if let Some((field, value)) = parse_labeled_line(line) {
            record.set(field, value);
        }
    }

    record
}

/// Match a single line against the label table
fn parse_labeled_line(line: &str) -> Option<(SceneField, String)> {
    let captures = LABELED_LINE_RE.captures(line)?;
    let field = SceneField::from_label(captures.get(1)?.as_str())?;
    let value = captures.get(2)?.as_str().trim().to_string();
    Some((field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Characters: A girl in a yellow raincoat\n\
        Setting: A rainy rooftop at night\n\
        Mood: Lonely, contemplative\n\
        Camera: Wide shot from behind\n\
        Actions: She stares at the city lights";

    #[test]
    fn test_parses_well_formed_reply() {
        let record = parse_scene_breakdown(WELL_FORMED);

        assert_eq!(record.characters, "A girl in a yellow raincoat");
        assert_eq!(record.setting, "A rainy rooftop at night");
        assert_eq!(record.mood, "Lonely, contemplative");
        assert_eq!(record.camera, "Wide shot from behind");
        assert_eq!(record.actions, "She stares at the city lights");
    }

    #[test]
    fn test_line_order_does_not_matter() {
        let mut lines: Vec<&str> = WELL_FORMED.lines().collect();
        lines.reverse();
        let reversed = lines.join("\n");

        lines.swap(0, 2);
        let shuffled = lines.join("\n");

        let expected = parse_scene_breakdown(WELL_FORMED);
        assert_eq!(parse_scene_breakdown(&reversed), expected);
        assert_eq!(parse_scene_breakdown(&shuffled), expected);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let raw = "Mood: Calm\nCharacters: Two friends\nMood: Tense and dark";
        let record = parse_scene_breakdown(raw);

        assert_eq!(record.mood, "Tense and dark");
        assert_eq!(record.characters, "Two friends");
    }

    #[test]
    fn test_tolerates_prose_blank_lines_and_separators() {
        let raw = "Sure! Here is the breakdown:\n\
            \n\
            \x20 CHARACTERS - An old fisherman  \n\
            setting:The harbor at dawn\n\
            Lighting: golden\n\
            \n\
            Hope this helps.";
        let record = parse_scene_breakdown(raw);

        assert_eq!(record.characters, "An old fisherman");
        assert_eq!(record.setting, "The harbor at dawn");
        assert_eq!(record.mood, "");
        assert_eq!(record.camera, "");
        assert_eq!(record.actions, "");
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let raw = "Mood: Eerie\r\nCamera: Dutch angle\r\n";
        let record = parse_scene_breakdown(raw);

        assert_eq!(record.mood, "Eerie");
        assert_eq!(record.camera, "Dutch angle");
    }

    #[test]
    fn test_blank_values() {
        // Trailing whitespace still counts as a value, which trims to empty
        let record = parse_scene_breakdown("Mood: Warm\nMood:   \nCamera: Close-up\nCamera:");

        assert_eq!(record.mood, "");
        assert_eq!(record.camera, "Close-up");
    }

    #[test]
    fn test_empty_reply_yields_empty_record() {
        assert_eq!(parse_scene_breakdown(""), SceneRecord::default());
    }
}

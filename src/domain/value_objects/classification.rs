//! Classification - the model's verdict on whether a teaser is a story

/// Label the model returns for a teaser
///
/// The model is asked for one of three labels but nothing forces it to
/// comply, so anything else is kept, trimmed and lowercased, in [`Classification::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Story,
    NonStory,
    Unclear,
    Other(String),
}

impl Classification {
    /// Interpret a raw model reply (trimmed and lower-cased first)
    pub fn from_reply(reply: &str) -> Self {
        let label = reply.trim().to_lowercase();
        match label.as_str() {
            "story" => Self::Story,
            "non-story" => Self::NonStory,
            "unclear" => Self::Unclear,
            _ => Self::Other(label),
        }
    }

    /// The normalized label, as reported back to clients
    pub fn label(&self) -> &str {
        match self {
            Self::Story => "story",
            Self::NonStory => "non-story",
            Self::Unclear => "unclear",
            Self::Other(label) => label,
        }
    }

    pub fn is_story(&self) -> bool {
        matches!(self, Self::Story)
    }

    /// Only an explicit "unclear" earns a second opinion
    pub fn needs_relevance_check(&self) -> bool {
        matches!(self, Self::Unclear)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reply_normalizes() {
        assert_eq!(Classification::from_reply("  Story\n"), Classification::Story);
        assert_eq!(Classification::from_reply("NON-STORY"), Classification::NonStory);
        assert_eq!(Classification::from_reply("unclear"), Classification::Unclear);
    }

    #[test]
    fn test_unexpected_labels_are_kept() {
        let classification = Classification::from_reply("Story.");
        assert_eq!(classification, Classification::Other("story.".to_string()));
        assert_eq!(classification.label(), "story.");
        assert!(!classification.is_story());
        assert!(!classification.needs_relevance_check());
    }
}

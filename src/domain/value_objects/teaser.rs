//! Teaser - the short story premise a scene breakdown starts from

/// Teasers shorter than this (in characters, after trimming) are rejected
pub const MIN_TEASER_CHARS: usize = 10;

/// Teasers longer than this (in words) are cut down to the first N words
pub const MAX_TEASER_WORDS: usize = 150;

/// Prefix used when continuing from a previous teaser
const CONTINUATION_PREFIX: &str = "Next scene after:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeaserError {
    #[error("Teaser must be at least {MIN_TEASER_CHARS} characters.")]
    TooShort,
}

/// A validated teaser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teaser(String);

impl Teaser {
    /// Validate raw client input.
    ///
    /// The text is trimmed, checked against [`MIN_TEASER_CHARS`], and
    /// truncated to [`MAX_TEASER_WORDS`] words if it runs long.
    pub fn parse(raw: &str) -> Result<Self, TeaserError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_TEASER_CHARS {
            return Err(TeaserError::TooShort);
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if words.len() > MAX_TEASER_WORDS {
            return Ok(Self(words[..MAX_TEASER_WORDS].join(" ")));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The teaser for the scene that follows this one
    pub fn continuation(&self) -> Self {
        Self(format!("{} {}", CONTINUATION_PREFIX, self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl std::fmt::Display for Teaser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

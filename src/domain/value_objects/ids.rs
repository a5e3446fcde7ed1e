//! Strongly-typed identifiers

use uuid::Uuid;

/// Longest client-supplied session id accepted
pub const MAX_SESSION_ID_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Session id must be at most 64 letters, digits, '-' or '_'.")]
pub struct InvalidSessionId;

/// Identifies the session a style context belongs to
///
/// Clients pick (or mint) a session id and send it with every request.
/// Requests without one fall into the shared session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Name of the session used when the client does not send an id
    pub const SHARED: &'static str = "shared";

    /// Mint a fresh, random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The session every id-less request falls into
    pub fn shared() -> Self {
        Self(Self::SHARED.to_string())
    }

    /// Accept a client-supplied id. Blank input yields `None`.
    pub fn parse(raw: &str) -> Result<Option<Self>, InvalidSessionId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let well_formed = trimmed.len() <= MAX_SESSION_ID_CHARS
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(InvalidSessionId);
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

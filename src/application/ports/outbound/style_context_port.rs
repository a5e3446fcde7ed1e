use async_trait::async_trait;

use crate::domain::value_objects::{SessionId, StyleContext};

/// Storage for per-session style contexts
///
/// Writes replace the whole context; concurrent writers to one session
/// race and the last one wins.
#[async_trait]
pub trait StyleContextRepositoryPort: Send + Sync {
    /// Current context for a session, empty if none was saved yet
    async fn get(&self, session: &SessionId) -> StyleContext;
    async fn save(&self, session: &SessionId, context: StyleContext);
    async fn reset(&self, session: &SessionId);
}

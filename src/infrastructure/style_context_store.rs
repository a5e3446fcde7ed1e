//! In-memory style context store
//!
//! Contexts live for the lifetime of the process; nothing is persisted.
//! The number of sessions held is capped: saving a new session at capacity
//! evicts the one written least recently.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::StyleContextRepositoryPort;
use crate::domain::value_objects::{SessionId, StyleContext};

/// Sessions kept before the least recently written one is evicted
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

struct Entries {
    contexts: HashMap<SessionId, (u64, StyleContext)>,
    /// Write counter; the entry with the lowest stamp is evicted first
    clock: u64,
}

pub struct InMemoryStyleContextStore {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl InMemoryStyleContextStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries {
                contexts: HashMap::new(),
                clock: 0,
            }),
            capacity: capacity.max(1),
        }
    }
}

impl Default for InMemoryStyleContextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StyleContextRepositoryPort for InMemoryStyleContextStore {
    async fn get(&self, session: &SessionId) -> StyleContext {
        self.entries
            .read()
            .await
            .contexts
            .get(session)
            .map(|(_, context)| context.clone())
            .unwrap_or_default()
    }

    async fn save(&self, session: &SessionId, context: StyleContext) {
        tracing::debug!(
            session = %session,
            character_design = %context.character_design,
            color_palette = %context.color_palette,
            camera_style = %context.camera_style,
            "Style context updated"
        );

        let mut entries = self.entries.write().await;
        if !entries.contexts.contains_key(session) && entries.contexts.len() >= self.capacity {
            let oldest = entries
                .contexts
                .iter()
                .min_by_key(|(_, (stamp, _))| *stamp)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                entries.contexts.remove(&oldest);
                tracing::debug!(session = %oldest, "Evicted least recently written style context");
            }
        }

        entries.clock += 1;
        let stamp = entries.clock;
        entries.contexts.insert(session.clone(), (stamp, context));
    }

    async fn reset(&self, session: &SessionId) {
        self.entries.write().await.contexts.remove(session);
    }
}

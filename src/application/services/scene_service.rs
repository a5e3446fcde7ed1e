//! Scene Service - turns a teaser into a five-field scene breakdown
//!
//! Pipeline: story gate, breakdown prompt, best-effort parse, then a
//! style context update for the caller's session. Each model call waits
//! for the previous one; nothing is retried.

use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::outbound::{
    LlmError, LlmPort, LlmRequest, StyleContextRepositoryPort,
};
use crate::application::services::classification_service::{ClassificationService, GateDecision};
use crate::application::services::llm::{build_scene_breakdown_prompt, parse_scene_breakdown};
use crate::domain::entities::SceneRecord;
use crate::domain::value_objects::{Classification, SessionId, StyleContext, Teaser};

#[derive(Debug, thiserror::Error)]
pub enum SceneServiceError {
    #[error("Teaser not recognized as story (classified as \"{0}\")")]
    NotAStory(Classification),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Service for generating scene breakdowns
pub struct SceneService {
    llm: Arc<dyn LlmPort>,
    classifier: ClassificationService,
    style_contexts: Arc<dyn StyleContextRepositoryPort>,
}

impl SceneService {
    pub fn new(
        llm: Arc<dyn LlmPort>,
        style_contexts: Arc<dyn StyleContextRepositoryPort>,
    ) -> Self {
        Self {
            classifier: ClassificationService::new(llm.clone()),
            llm,
            style_contexts,
        }
    }

    /// Generate a breakdown for a teaser, gated on it being a story
    ///
    /// With `override_classification` set the gate is skipped entirely.
    pub async fn generate_scene(
        &self,
        session: &SessionId,
        teaser: &Teaser,
        override_classification: bool,
    ) -> Result<SceneRecord, SceneServiceError> {
        match self
            .classifier
            .evaluate_gate(teaser, override_classification)
            .await?
        {
            GateDecision::Rejected(classification) => {
                tracing::info!(
                    session = %session,
                    classification = %classification,
                    "Teaser rejected by story gate"
                );
                Err(SceneServiceError::NotAStory(classification))
            }
            GateDecision::Accepted(_) | GateDecision::Bypassed => {
                self.break_down(session, teaser).await
            }
        }
    }

    /// Generate the scene that follows `previous`, skipping the gate
    pub async fn generate_next_scene(
        &self,
        session: &SessionId,
        previous: &Teaser,
    ) -> Result<SceneRecord, SceneServiceError> {
        let teaser = previous.continuation();
        self.generate_scene(session, &teaser, true).await
    }

    async fn break_down(
        &self,
        session: &SessionId,
        teaser: &Teaser,
    ) -> Result<SceneRecord, SceneServiceError> {
        tracing::debug!(words = teaser.word_count(), "Requesting scene breakdown");
        let request = LlmRequest::new(build_scene_breakdown_prompt(teaser));
        let response = self.llm.generate(request).await?;
        tracing::debug!(
            model = %response.model,
            raw = %response.content,
            "Raw scene breakdown reply"
        );

        let scene = parse_scene_breakdown(&response.content);
        let missing = scene.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "Model reply left scene fields empty");
        }
        tracing::info!(?scene, "Parsed scene elements");

        self.style_contexts
            .save(session, StyleContext::from_scene(&scene, Utc::now()))
            .await;

        Ok(scene)
    }
}

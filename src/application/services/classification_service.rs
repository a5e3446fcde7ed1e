//! Classification Service - decides whether a teaser may be broken into a scene
//!
//! The classifier asks the model for one of three labels. Teasers labeled
//! "unclear" get a second yes/no question; everything else is decided on the
//! label alone. A caller override skips both calls.

use std::sync::Arc;

use crate::application::ports::outbound::{LlmError, LlmPort, LlmRequest};
use crate::application::services::llm::{build_classification_prompt, build_relevance_prompt};
use crate::domain::value_objects::{Classification, Teaser};

/// Label and yes/no calls want the most likely answer, not a creative one
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

/// Outcome of the story gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The caller forced generation; the model was not consulted
    Bypassed,
    /// The teaser counts as a story
    Accepted(Classification),
    /// The teaser does not count as a story
    Rejected(Classification),
}

/// Service for classifying teasers
pub struct ClassificationService {
    llm: Arc<dyn LlmPort>,
}

impl ClassificationService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Ask the model for a story / non-story / unclear label
    pub async fn classify(&self, teaser: &Teaser) -> Result<Classification, LlmError> {
        let request = LlmRequest::new(build_classification_prompt(teaser))
            .with_temperature(CLASSIFICATION_TEMPERATURE);
        let response = self.llm.generate(request).await?;

        let classification = Classification::from_reply(&response.content);
        tracing::info!(
            classification = %classification,
            model = %response.model,
            "Teaser classified"
        );
        Ok(classification)
    }

    /// Ask the model whether the teaser describes a cinematic scene
    pub async fn check_relevance(&self, teaser: &Teaser) -> Result<bool, LlmError> {
        let request = LlmRequest::new(build_relevance_prompt(teaser))
            .with_temperature(CLASSIFICATION_TEMPERATURE);
        let response = self.llm.generate(request).await?;

        let relevant = is_affirmative(&response.content);
        tracing::info!(relevant, "Fallback relevance check");
        Ok(relevant)
    }

    /// Run the gate: override wins, then the label, then the fallback
    pub async fn evaluate_gate(
        &self,
        teaser: &Teaser,
        override_classification: bool,
    ) -> Result<GateDecision, LlmError> {
        if override_classification {
            tracing::debug!("Classification overridden by caller");
            return Ok(GateDecision::Bypassed);
        }

        let classification = self.classify(teaser).await?;

        let relevant = if classification.is_story() {
            true
        } else if classification.needs_relevance_check() {
            self.check_relevance(teaser).await?
        } else {
            false
        };

        if relevant {
            Ok(GateDecision::Accepted(classification))
        } else {
            Ok(GateDecision::Rejected(classification))
        }
    }
}

/// Permissive yes-check: any reply containing "yes", in any case, counts
pub fn is_affirmative(reply: &str) -> bool {
    reply.trim().to_lowercase().contains("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::application::ports::outbound::LlmResponse;

    /// Replays canned replies in order and records every prompt it receives
    struct ScriptedLlm {
        replies: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
        temperatures: Mutex<Vec<Option<f32>>>,
    }

    impl ScriptedLlm {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
                temperatures: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmPort for ScriptedLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push(request.prompt.clone());
            self.temperatures.lock().unwrap().push(request.temperature);
            let content = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| LlmError::Request("no scripted reply left".to_string()))?;
            Ok(LlmResponse {
                content,
                model: "mock".to_string(),
            })
        }
    }

    fn teaser() -> Teaser {
        Teaser::parse("A girl stands alone on a rainy rooftop at night.").unwrap()
    }

    fn service(llm: &Arc<ScriptedLlm>) -> ClassificationService {
        ClassificationService::new(llm.clone())
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("  yes, probably\n"));
        assert!(is_affirmative("YES."));
        assert!(!is_affirmative("No"));
        assert!(!is_affirmative(""));
    }

    #[tokio::test]
    async fn test_story_passes_without_fallback() {
        let llm = Arc::new(ScriptedLlm::new(&["Story"]));

        let decision = service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(decision, GateDecision::Accepted(Classification::Story));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_unclear_consults_fallback_once() {
        let llm = Arc::new(ScriptedLlm::new(&["unclear", "Yes, it does."]));

        let decision = service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(decision, GateDecision::Accepted(Classification::Unclear));
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].starts_with("Does this teaser describe a cinematic story scene?"));
    }

    #[tokio::test]
    async fn test_gate_calls_use_zero_temperature() {
        let llm = Arc::new(ScriptedLlm::new(&["unclear", "yes"]));

        service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(
            *llm.temperatures.lock().unwrap(),
            vec![Some(CLASSIFICATION_TEMPERATURE), Some(CLASSIFICATION_TEMPERATURE)]
        );
    }

    #[tokio::test]
    async fn test_unclear_rejected_by_fallback() {
        let llm = Arc::new(ScriptedLlm::new(&["unclear", "No"]));

        let decision = service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(decision, GateDecision::Rejected(Classification::Unclear));
        assert_eq!(llm.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_non_story_rejected_without_fallback() {
        let llm = Arc::new(ScriptedLlm::new(&["non-story"]));

        let decision = service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(decision, GateDecision::Rejected(Classification::NonStory));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_label_rejected_without_fallback() {
        let llm = Arc::new(ScriptedLlm::new(&["It is a poem."]));

        let decision = service(&llm).evaluate_gate(&teaser(), false).await.unwrap();

        assert_eq!(
            decision,
            GateDecision::Rejected(Classification::Other("it is a poem.".to_string()))
        );
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_override_skips_the_model() {
        let llm = Arc::new(ScriptedLlm::new(&[]));

        let decision = service(&llm).evaluate_gate(&teaser(), true).await.unwrap();

        assert_eq!(decision, GateDecision::Bypassed);
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let llm = Arc::new(ScriptedLlm::new(&[]));

        let result = service(&llm).evaluate_gate(&teaser(), false).await;

        assert!(matches!(result, Err(LlmError::Request(_))));
    }
}

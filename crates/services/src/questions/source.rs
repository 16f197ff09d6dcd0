use std::fmt;
use std::sync::Arc;

use quiz_core::QUIZ_LENGTH;
use quiz_core::model::QuestionSet;
use tracing::{info, warn};

use crate::ai::{HuggingFaceClient, QuestionGenerator};
use crate::error::QuestionSourceError;
use crate::questions::fallback::fallback_questions;
use crate::questions::parse::parse_batch;
use crate::questions::prompt::build_prompt;

/// Supplies validated question sets for a topic.
///
/// Generation is attempted once per fetch. Anything short of twelve valid
/// questions is replaced wholesale by the built-in set.
#[derive(Clone)]
pub struct QuestionSource {
    generator: Option<Arc<dyn QuestionGenerator>>,
}

impl QuestionSource {
    #[must_use]
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Source backed by the Hugging Face client configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(HuggingFaceClient::from_env()))
    }

    /// Source that never calls a generator and always serves the built-in set.
    #[must_use]
    pub fn offline() -> Self {
        Self { generator: None }
    }

    /// Generate and validate a question set without falling back.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the source is offline, the provider fails,
    /// the output cannot be parsed, or fewer/more than twelve questions survive
    /// validation.
    pub async fn try_generate(&self, topic: &str) -> Result<QuestionSet, QuestionSourceError> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(QuestionSourceError::Offline)?;

        let raw = generator.generate(&build_prompt(topic)).await?;
        let batch = parse_batch(&raw)?;

        for rejected in &batch.rejected {
            warn!(
                position = rejected.position,
                reason = %rejected.reason,
                "dropping generated question"
            );
        }

        if batch.questions.len() != QUIZ_LENGTH {
            return Err(QuestionSourceError::Incomplete {
                valid: batch.questions.len(),
                expected: QUIZ_LENGTH,
            });
        }

        Ok(QuestionSet::new(batch.questions)?)
    }

    /// Fetch twelve valid questions for `topic`. Never fails.
    pub async fn fetch(&self, topic: &str) -> QuestionSet {
        match self.try_generate(topic).await {
            Ok(questions) => {
                info!(topic, "using generated questions");
                questions
            }
            Err(QuestionSourceError::Offline) => {
                info!(topic, "offline, using built-in questions");
                fallback_questions()
            }
            Err(err) => {
                warn!(topic, error = %err, "question generation failed, using built-in questions");
                fallback_questions()
            }
        }
    }
}

impl fmt::Debug for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionSource")
            .field("online", &self.generator.is_some())
            .finish()
    }
}

#![forbid(unsafe_code)]

pub mod ai;
pub mod error;
pub mod questions;
pub mod sessions;

pub use quiz_core::Clock;

pub use ai::{HuggingFaceClient, HuggingFaceConfig, QuestionGenerator};
pub use error::{ProviderError, QuestionSourceError};
pub use questions::{QuestionSource, fallback_questions};
pub use sessions::{
    AnswerOutcome, FinishReason, OutcomeKind, QuizProgress, QuizSession, QuizSummary,
};

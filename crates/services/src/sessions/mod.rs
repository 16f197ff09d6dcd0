mod outcome;
mod progress;
mod service;
mod summary;

// Public API of the session subsystem.
pub use outcome::{AnswerOutcome, OutcomeKind};
pub use progress::QuizProgress;
pub use service::QuizSession;
pub use summary::{FinishReason, QuizSummary};

use chrono::{DateTime, Duration, Utc};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Every question was answered correctly.
    Completed,
    WrongAnswer,
    /// The session lost track of its position and was closed.
    OutOfQuestions,
}

/// Final results of a finished session.
///
/// `correct_count` is the position reached, not a value derived from the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub max_score: u32,
    pub correct_count: usize,
    pub total_questions: usize,
    pub reason: FinishReason,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl QuizSummary {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.reason == FinishReason::Completed && self.score == self.max_score
    }

    /// Score as a whole percentage of the maximum.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        self.score.saturating_mul(100) / self.max_score
    }
}

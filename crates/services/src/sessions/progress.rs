use quiz_core::Tier;

/// Live view of where a session stands, for rendering a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question being asked.
    pub current_question_number: usize,
    pub total_questions: usize,
    pub score: u32,
    pub level: Tier,
}

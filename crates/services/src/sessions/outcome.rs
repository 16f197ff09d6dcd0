use std::fmt;

use quiz_core::model::ChoiceKey;

/// What happened on a single `submit_answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Correct,
    Wrong { correct_answer: ChoiceKey },
    /// The session was not started or is already over.
    NotRunning,
    /// The session ran past its last question.
    NoMoreQuestions,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::Correct => f.write_str("Correct!"),
            OutcomeKind::Wrong { correct_answer } => {
                write!(f, "Wrong! Correct answer was {correct_answer}")
            }
            OutcomeKind::NotRunning => f.write_str("Game is not running"),
            OutcomeKind::NoMoreQuestions => f.write_str("No more questions"),
        }
    }
}

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The expected letter, when a question was actually answered.
    pub correct_answer: Option<ChoiceKey>,
    pub points_earned: u32,
    pub total_score: u32,
    pub game_over: bool,
    /// 1-based number of the next question, absent once the game is over.
    pub next_question_number: Option<usize>,
    pub kind: OutcomeKind,
}

impl AnswerOutcome {
    pub(crate) fn correct(
        correct_answer: ChoiceKey,
        points_earned: u32,
        total_score: u32,
        next_question_number: Option<usize>,
    ) -> Self {
        Self {
            correct: true,
            correct_answer: Some(correct_answer),
            points_earned,
            total_score,
            game_over: next_question_number.is_none(),
            next_question_number,
            kind: OutcomeKind::Correct,
        }
    }

    pub(crate) fn wrong(correct_answer: ChoiceKey, total_score: u32) -> Self {
        Self {
            correct: false,
            correct_answer: Some(correct_answer),
            points_earned: 0,
            total_score,
            game_over: true,
            next_question_number: None,
            kind: OutcomeKind::Wrong { correct_answer },
        }
    }

    pub(crate) fn ended(kind: OutcomeKind, total_score: u32) -> Self {
        Self {
            correct: false,
            correct_answer: None,
            points_earned: 0,
            total_score,
            game_over: true,
            next_question_number: None,
            kind,
        }
    }

    /// Human-readable message for the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

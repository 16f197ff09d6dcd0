use thiserror::Error;

use crate::model::question::Question;
use crate::model::tier::QUIZ_LENGTH;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("expected {expected} questions, got {len}")]
    WrongLength { len: usize, expected: usize },
}

/// Ordered list of exactly `QUIZ_LENGTH` validated questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Wrap a list of questions, rejecting any list of the wrong size.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::WrongLength` unless exactly `QUIZ_LENGTH` questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.len() != QUIZ_LENGTH {
            return Err(QuestionSetError::WrongLength {
                len: questions.len(),
                expected: QUIZ_LENGTH,
            });
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = QuestionSetError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

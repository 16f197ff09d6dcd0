use thiserror::Error;

use quiz_core::model::{Question, QuestionDraft, QuestionError};

use crate::error::QuestionSourceError;

/// Questions that survived validation plus the ones that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBatch {
    pub questions: Vec<Question>,
    pub rejected: Vec<RejectedQuestion>,
}

/// A generated element that did not make it into the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedQuestion {
    /// 1-based position in the generated array.
    pub position: usize,
    pub reason: Rejection,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("malformed question: {0}")]
    Shape(String),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

/// Slice from the first `[` to the last `]`, inclusive.
///
/// Generators tend to wrap the array in prose; everything outside is ignored.
#[must_use]
pub fn extract_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse generated text into validated questions.
///
/// Elements are validated one by one; an invalid element is recorded in
/// `rejected` and does not fail the batch.
///
/// # Errors
///
/// Returns `QuestionSourceError::NoJsonArray` when no array literal is found and
/// `QuestionSourceError::Json` when the array is not valid JSON.
pub fn parse_batch(raw: &str) -> Result<ParsedBatch, QuestionSourceError> {
    let array = extract_json_array(raw).ok_or(QuestionSourceError::NoJsonArray)?;
    let elements: Vec<serde_json::Value> = serde_json::from_str(array)?;

    let mut questions = Vec::with_capacity(elements.len());
    let mut rejected = Vec::new();

    for (i, element) in elements.into_iter().enumerate() {
        let validated = serde_json::from_value::<QuestionDraft>(element)
            .map_err(|err| Rejection::Shape(err.to_string()))
            .and_then(|draft| draft.validate().map_err(Rejection::from));

        match validated {
            Ok(question) => questions.push(question),
            Err(reason) => rejected.push(RejectedQuestion {
                position: i + 1,
                reason,
            }),
        }
    }

    Ok(ParsedBatch {
        questions,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::ChoiceKey;

    #[test]
    fn extracts_array_wrapped_in_prose() {
        let raw = "Sure! Here are your questions:\n[{\"a\": 1}]\nHope that helps.";
        assert_eq!(extract_json_array(raw), Some("[{\"a\": 1}]"));
    }

    #[test]
    fn extraction_spans_first_open_to_last_close() {
        assert_eq!(extract_json_array("x [1] y [2] z"), Some("[1] y [2]"));
        assert_eq!(extract_json_array("no brackets"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
        assert_eq!(extract_json_array("[ unterminated"), None);
    }

    #[test]
    fn missing_array_is_an_error() {
        let err = parse_batch("I cannot help with that.").unwrap_err();
        assert!(matches!(err, QuestionSourceError::NoJsonArray));
    }

    #[test]
    fn broken_json_is_an_error() {
        let err = parse_batch("[{\"text\": \"Q?\",]").unwrap_err();
        assert!(matches!(err, QuestionSourceError::Json(_)));
    }

    #[test]
    fn invalid_elements_are_dropped_individually() {
        let raw = r#"[
            {"text": " Capital of Italy? ", "options": {"a": "Rome", "b": "Milan", "c": "Turin", "d": "Naples"}, "answer": " A "},
            {"text": "", "options": {"a": "1", "b": "2", "c": "3", "d": "4"}, "answer": "a"},
            {"text": "Bad answer", "options": {"a": "1", "b": "2", "c": "3", "d": "4"}, "answer": "e"},
            {"text": "Missing option", "options": {"a": "1", "b": "2", "c": "3"}, "answer": "a"},
            "just a string",
            {"text": "Largest planet?", "options": {"a": "Mars", "b": "Jupiter", "c": "Venus", "d": "Earth"}, "answer": "b"}
        ]"#;

        let batch = parse_batch(raw).unwrap();

        assert_eq!(batch.questions.len(), 2);
        assert_eq!(batch.questions[0].text(), "Capital of Italy?");
        assert_eq!(batch.questions[0].answer(), ChoiceKey::A);
        assert_eq!(batch.questions[1].answer(), ChoiceKey::B);

        let positions: Vec<_> = batch.rejected.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![2, 3, 4, 5]);
        assert_eq!(
            batch.rejected[0].reason,
            Rejection::Invalid(QuestionError::EmptyText)
        );
        assert_eq!(
            batch.rejected[1].reason,
            Rejection::Invalid(QuestionError::InvalidAnswer("e".into()))
        );
        assert_eq!(
            batch.rejected[2].reason,
            Rejection::Invalid(QuestionError::EmptyOption(ChoiceKey::D))
        );
        assert!(matches!(batch.rejected[3].reason, Rejection::Shape(_)));
    }
}

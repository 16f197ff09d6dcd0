use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::model::choice::ChoiceKey;

//
// ─── QUESTION TYPES ───────────────────────────────────────────────────────────
//

/// The four option texts of a question, keyed `a`-`d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOptions {
    a: String,
    b: String,
    c: String,
    d: String,
}

impl QuestionOptions {
    #[must_use]
    pub fn get(&self, key: ChoiceKey) -> &str {
        match key {
            ChoiceKey::A => &self.a,
            ChoiceKey::B => &self.b,
            ChoiceKey::C => &self.c,
            ChoiceKey::D => &self.d,
        }
    }
}

/// A validated multiple-choice question.
///
/// Text and all four options are trimmed and non-empty; the answer is always one
/// of the four keys. Instances can only be obtained through `Question::new` or
/// `QuestionDraft::validate`, so a `Question` in hand is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: QuestionOptions,
    answer: ChoiceKey,
}

impl Question {
    /// Build a question from raw parts, trimming every field and lowercasing the
    /// answer before validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank,
    /// `QuestionError::InvalidAnswer` if the answer is not one of `a`-`d`, and
    /// `QuestionError::EmptyOption` for the first blank option.
    pub fn new<S: AsRef<str>>(
        text: impl AsRef<str>,
        options: [S; 4],
        answer: &str,
    ) -> Result<Self, QuestionError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let normalized = answer.trim().to_lowercase();
        let answer = ChoiceKey::parse(&normalized)
            .ok_or_else(|| QuestionError::InvalidAnswer(normalized.clone()))?;

        let [a, b, c, d] = options.map(|option| option.as_ref().trim().to_owned());
        for (key, option) in ChoiceKey::ALL.into_iter().zip([&a, &b, &c, &d]) {
            if option.is_empty() {
                return Err(QuestionError::EmptyOption(key));
            }
        }

        Ok(Self {
            text: text.to_owned(),
            options: QuestionOptions { a, b, c, d },
            answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn option(&self, key: ChoiceKey) -> &str {
        self.options.get(key)
    }

    /// Options in presentation order.
    pub fn options(&self) -> impl Iterator<Item = (ChoiceKey, &str)> {
        ChoiceKey::ALL
            .into_iter()
            .map(move |key| (key, self.options.get(key)))
    }

    #[must_use]
    pub fn answer(&self) -> ChoiceKey {
        self.answer
    }

    /// True only when `choice` is exactly the answer letter, in either case.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        ChoiceKey::parse(choice) == Some(self.answer)
    }
}

//
// ─── DRAFTS ───────────────────────────────────────────────────────────────────
//

/// Loosely typed question shape as produced by a text generator.
///
/// Missing fields default to empty and scalar values are stringified, so that
/// a single sloppy field surfaces as a validation error instead of a parse
/// failure of the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default)]
    pub options: DraftOptions,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DraftOptions {
    #[serde(default, deserialize_with = "lenient_string")]
    pub a: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub b: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub c: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub d: String,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Same as `Question::new`.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let DraftOptions { a, b, c, d } = self.options;
        Question::new(self.text, [a, b, c, d], &self.answer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Flag(b)) => b.to_string(),
    })
}

//
// ─── QUESTION VALIDATION ERRORS ───────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing question text")]
    EmptyText,

    #[error("invalid answer '{0}'")]
    InvalidAnswer(String),

    #[error("option {0} is missing")]
    EmptyOption(ChoiceKey),
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_lowercases() {
        let q = Question::new(
            "  What is 2 + 2? ",
            [" 3", "4 ", "5", "6"],
            " B ",
        )
        .unwrap();

        assert_eq!(q.text(), "What is 2 + 2?");
        assert_eq!(q.option(ChoiceKey::A), "3");
        assert_eq!(q.option(ChoiceKey::B), "4");
        assert_eq!(q.answer(), ChoiceKey::B);
    }

    #[test]
    fn new_rejects_blank_text() {
        let err = Question::new("   ", ["1", "2", "3", "4"], "a").unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn new_rejects_unknown_answer() {
        let err = Question::new("Q?", ["1", "2", "3", "4"], "E").unwrap_err();
        assert_eq!(err, QuestionError::InvalidAnswer("e".into()));

        let err = Question::new("Q?", ["1", "2", "3", "4"], "").unwrap_err();
        assert_eq!(err, QuestionError::InvalidAnswer(String::new()));
    }

    #[test]
    fn new_reports_first_blank_option() {
        let err = Question::new("Q?", ["1", "  ", "3", ""], "a").unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption(ChoiceKey::B));
    }

    #[test]
    fn is_correct_requires_exact_letter() {
        let q = Question::new("Q?", ["1", "2", "3", "4"], "c").unwrap();
        assert!(q.is_correct("c"));
        assert!(q.is_correct("C"));
        assert!(!q.is_correct("a"));
        assert!(!q.is_correct("cc"));
        assert!(!q.is_correct("3"));
    }

    #[test]
    fn options_iterate_in_key_order() {
        let q = Question::new("Q?", ["w", "x", "y", "z"], "a").unwrap();
        let collected: Vec<_> = q.options().collect();
        assert_eq!(
            collected,
            vec![
                (ChoiceKey::A, "w"),
                (ChoiceKey::B, "x"),
                (ChoiceKey::C, "y"),
                (ChoiceKey::D, "z"),
            ]
        );
    }

    #[test]
    fn draft_accepts_scalars_and_missing_fields() {
        let draft: QuestionDraft = serde_json::from_str(
            r#"{"text": "Pick four", "options": {"a": 3, "b": 4.5, "c": true, "d": "four"}, "answer": "B"}"#,
        )
        .unwrap();
        let q = draft.validate().unwrap();
        assert_eq!(q.option(ChoiceKey::A), "3");
        assert_eq!(q.option(ChoiceKey::B), "4.5");
        assert_eq!(q.option(ChoiceKey::C), "true");
        assert_eq!(q.answer(), ChoiceKey::B);

        let draft: QuestionDraft = serde_json::from_str(r#"{"text": "No options"}"#).unwrap();
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::InvalidAnswer(String::new())
        );
    }

    #[test]
    fn serializes_options_as_keyed_map() {
        let q = Question::new("Q?", ["1", "2", "3", "4"], "d").unwrap();
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["options"]["c"], "3");
        assert_eq!(value["answer"], "d");
    }
}

use quiz_core::QUIZ_LENGTH;

/// Instruction sent to the generator for a given topic.
#[must_use]
pub fn build_prompt(topic: &str) -> String {
    format!(
        r#"Generate exactly {QUIZ_LENGTH} multiple-choice quiz questions about: {topic}

Return ONLY a JSON array of questions, for example:

[
  {{
    "text": "Question text?",
    "options": {{"a": "Option A", "b": "Option B", "c": "Option C", "d": "Option D"}},
    "answer": "a"
  }},
  ...
]
"#
    )
}

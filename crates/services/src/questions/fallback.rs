use std::sync::LazyLock;

use quiz_core::model::{Question, QuestionSet};

/// Built-in general-knowledge questions: text, options a-d, answer.
const FALLBACK: [(&str, [&str; 4], &str); 12] = [
    (
        "What is the capital of France?",
        ["London", "Paris", "Berlin", "Madrid"],
        "b",
    ),
    (
        "Which planet is known as the Red Planet?",
        ["Venus", "Jupiter", "Mars", "Saturn"],
        "c",
    ),
    ("What is 2 + 2?", ["3", "4", "5", "6"], "b"),
    (
        "Who wrote Romeo and Juliet?",
        [
            "Charles Dickens",
            "Jane Austen",
            "William Shakespeare",
            "Mark Twain",
        ],
        "c",
    ),
    (
        "What is the largest ocean on Earth?",
        ["Atlantic", "Indian", "Arctic", "Pacific"],
        "d",
    ),
    (
        "In what year did World War II end?",
        ["1943", "1944", "1945", "1946"],
        "c",
    ),
    (
        "What is the chemical formula for salt?",
        ["NaCl", "KCl", "MgCl", "CaCl"],
        "a",
    ),
    (
        "Which country has the most population?",
        ["India", "USA", "Indonesia", "Brazil"],
        "a",
    ),
    (
        "What is the Fibonacci sequence's 7th number?",
        ["8", "13", "21", "34"],
        "b",
    ),
    (
        "How many bones does an adult human have?",
        ["186", "206", "256", "306"],
        "b",
    ),
    (
        "What is the derivative of x^3?",
        ["x^2", "3x^2", "3x", "x^4"],
        "b",
    ),
    (
        "Which algorithm has O(n log n) average time complexity?",
        ["Bubble Sort", "Merge Sort", "Selection Sort", "Insertion Sort"],
        "b",
    ),
];

static FALLBACK_SET: LazyLock<QuestionSet> =
    LazyLock::new(|| build_fallback().expect("built-in fallback questions are valid"));

fn build_fallback() -> Result<QuestionSet, quiz_core::Error> {
    let questions = FALLBACK
        .iter()
        .map(|(text, options, answer)| Question::new(text, *options, answer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionSet::new(questions)?)
}

/// The fixed twelve-question set used whenever generation fails.
///
/// Independent of topic.
///
/// # Panics
///
/// Panics if the built-in table is invalid; covered by unit tests.
#[must_use]
pub fn fallback_questions() -> QuestionSet {
    FALLBACK_SET.clone()
}

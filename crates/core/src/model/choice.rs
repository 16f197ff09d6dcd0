use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── CHOICE KEY ───────────────────────────────────────────────────────────────
//

/// One of the four option slots of a multiple-choice question.
///
/// Keys are stored and compared in lowercase (`a`..`d`) and shown to players
/// in uppercase (`A`..`D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKey {
    A,
    B,
    C,
    D,
}

impl ChoiceKey {
    /// All keys in presentation order.
    pub const ALL: [ChoiceKey; 4] = [ChoiceKey::A, ChoiceKey::B, ChoiceKey::C, ChoiceKey::D];

    /// Parses a single letter `a`-`d`, ignoring case.
    ///
    /// Anything else (empty input, whitespace, several letters) is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "a" | "A" => Some(Self::A),
            "b" | "B" => Some(Self::B),
            "c" | "C" => Some(Self::C),
            "d" | "D" => Some(Self::D),
            _ => None,
        }
    }

    /// Zero-based slot position, matching `ChoiceKey::ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ChoiceKey::A => 0,
            ChoiceKey::B => 1,
            ChoiceKey::C => 2,
            ChoiceKey::D => 3,
        }
    }

    /// Lowercase letter used for storage and comparison.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChoiceKey::A => "a",
            ChoiceKey::B => "b",
            ChoiceKey::C => "c",
            ChoiceKey::D => "d",
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = match self {
            ChoiceKey::A => "A",
            ChoiceKey::B => "B",
            ChoiceKey::C => "C",
            ChoiceKey::D => "D",
        };
        f.write_str(upper)
    }
}

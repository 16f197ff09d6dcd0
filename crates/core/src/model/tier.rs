//! Difficulty tiers and the scoring curve derived from them.

use std::fmt;

/// Difficulty band of a question position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

/// How many consecutive positions a tier covers and what each is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSpec {
    pub tier: Tier,
    pub questions: usize,
    pub points: u32,
}

/// Tiers in play order. Quiz length and maximum score are derived from this table.
pub const TIERS: [TierSpec; 3] = [
    TierSpec {
        tier: Tier::Easy,
        questions: 4,
        points: 10,
    },
    TierSpec {
        tier: Tier::Medium,
        questions: 4,
        points: 20,
    },
    TierSpec {
        tier: Tier::Hard,
        questions: 4,
        points: 30,
    },
];

/// Number of questions in a quiz.
pub const QUIZ_LENGTH: usize = quiz_length();

const fn quiz_length() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < TIERS.len() {
        total += TIERS[i].questions;
        i += 1;
    }
    total
}

/// Score for answering every question correctly.
#[must_use]
pub const fn max_possible_score() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < TIERS.len() {
        total += TIERS[i].questions as u32 * TIERS[i].points;
        i += 1;
    }
    total
}

impl Tier {
    /// Tier for a zero-based question index.
    ///
    /// Indexes past the end of the table fall into the last tier.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        let mut boundary = 0;
        for spec in &TIERS {
            boundary += spec.questions;
            if index < boundary {
                return spec.tier;
            }
        }
        Tier::Hard
    }

    /// Points awarded for a correct answer in this tier.
    #[must_use]
    pub fn points(self) -> u32 {
        self.spec().points
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }

    fn spec(self) -> TierSpec {
        match self {
            Tier::Easy => TIERS[0],
            Tier::Medium => TIERS[1],
            Tier::Hard => TIERS[2],
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

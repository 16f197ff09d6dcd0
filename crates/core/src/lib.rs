#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use model::tier::{QUIZ_LENGTH, TIERS, Tier, TierSpec, max_possible_score};
pub use time::Clock;

mod choice;
mod question;
mod question_set;
pub mod tier;

pub use choice::ChoiceKey;
pub use question::{Question, QuestionDraft, QuestionError};
pub use question_set::{QuestionSet, QuestionSetError};
pub use tier::{Tier, TierSpec};

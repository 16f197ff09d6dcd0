mod fallback;
mod parse;
mod prompt;
mod source;

pub use fallback::fallback_questions;
pub use parse::{ParsedBatch, Rejection, RejectedQuestion, extract_json_array, parse_batch};
pub use prompt::build_prompt;
pub use source::QuestionSource;

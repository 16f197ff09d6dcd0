//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionSetError;

/// Errors emitted by a question generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question generator is not configured (missing API token)")]
    MissingCredential,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question generator returned an unexpected response")]
    UnexpectedResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while turning generated text into a question set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question source is offline")]
    Offline,
    #[error("generated text contains no JSON array")]
    NoJsonArray,
    #[error("generated JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} valid questions, got {valid}")]
    Incomplete { valid: usize, expected: usize },
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

mod client;
mod config;

use async_trait::async_trait;

use crate::error::ProviderError;

pub use client::HuggingFaceClient;
pub use config::HuggingFaceConfig;

/// A text generator that can be prompted for quiz questions.
///
/// Implementations make a single attempt per call; recovery is the caller's job.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Send `prompt` to the provider and return the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

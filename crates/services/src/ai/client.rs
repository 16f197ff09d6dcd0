use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::{HuggingFaceConfig, QuestionGenerator};
use crate::error::ProviderError;

/// Upper bound on generated tokens; twelve questions fit comfortably.
const MAX_NEW_TOKENS: u32 = 700;

/// `QuestionGenerator` backed by the Hugging Face inference API.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    config: Option<HuggingFaceConfig>,
}

impl HuggingFaceClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HuggingFaceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<HuggingFaceConfig>) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured HTTP client, e.g. one with custom proxy settings.
    #[must_use]
    pub fn with_client(client: Client, config: Option<HuggingFaceConfig>) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl QuestionGenerator for HuggingFaceClient {
    /// # Errors
    ///
    /// Returns `ProviderError` when no token is configured, the request fails,
    /// the status is anything but `200 OK`, or the body has an unexpected shape.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let config = self
            .config
            .as_ref()
            .ok_or(ProviderError::MissingCredential)?;

        let url = config.endpoint();
        debug!(%url, model = %config.model, "requesting generated questions");

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_token)
            .timeout(config.timeout)
            .json(&InferenceRequest::greedy(prompt))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::HttpStatus(status));
        }

        let body: serde_json::Value = response.json().await?;
        generated_text(body)
    }
}

fn generated_text(body: serde_json::Value) -> Result<String, ProviderError> {
    let outputs: Vec<GeneratedOutput> =
        serde_json::from_value(body).map_err(|_| ProviderError::UnexpectedResponse)?;
    outputs
        .into_iter()
        .next()
        .map(|output| output.generated_text)
        .ok_or(ProviderError::UnexpectedResponse)
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

impl<'a> InferenceRequest<'a> {
    fn greedy(inputs: &'a str) -> Self {
        Self {
            inputs,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                do_sample: false,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedOutput {
    generated_text: String,
}

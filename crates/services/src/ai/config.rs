use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_MODEL: &str = "bigscience/bloom";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the Hugging Face inference endpoint.
#[derive(Clone, Debug)]
pub struct HuggingFaceConfig {
    pub base_url: String,
    pub api_token: String,
    pub model: String,
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_token: api_token.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read settings from the process environment.
    ///
    /// Returns `None` when `HUGGINGFACE_API_TOKEN` is unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_token = lookup("HUGGINGFACE_API_TOKEN")?;
        if api_token.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(api_token.trim());
        if let Some(base_url) = lookup("QUIZ_HF_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup("QUIZ_HF_MODEL").filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        if let Some(secs) = lookup("QUIZ_HF_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }

    /// Full inference URL for the configured model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

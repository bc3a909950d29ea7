//! Gemini generateContent backend
//!
//! The API key is resolved on every request, so a rotated key file or a
//! re-exported variable takes effect without a restart. The key travels
//! only in the query string and is stripped from error messages.

use crate::ai::backend::{GenerationBackend, GenerationParams};
use crate::ai::wire::{GenerateContentRequest, GenerateContentResponse};
use cardassist_types::GenerationError;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Where the API key comes from
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    Literal(String),
    /// Environment variable name
    Env(String),
    /// File holding the key (surrounding whitespace ignored)
    File(PathBuf),
}

impl std::fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::Literal(_) => write!(f, "Literal(***)"),
            ApiKeySource::Env(var) => write!(f, "Env({})", var),
            ApiKeySource::File(path) => write!(f, "File({})", path.display()),
        }
    }
}

impl ApiKeySource {
    pub fn resolve(&self) -> Result<String, GenerationError> {
        let key = match self {
            ApiKeySource::Literal(key) => key.clone(),
            ApiKeySource::Env(var) => std::env::var(var).map_err(|_| {
                GenerationError::MissingApiKey(format!("environment variable {} is not set", var))
            })?,
            ApiKeySource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                GenerationError::MissingApiKey(format!("cannot read {}: {}", path.display(), e))
            })?,
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(GenerationError::MissingApiKey(format!("{:?} is empty", self)));
        }
        Ok(key.to_string())
    }
}

/// Connection settings for [`GeminiBackend`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: ApiKeySource,
    pub timeout: Duration,
    /// Ask the API for `application/json` output
    pub json_mode: bool,
    pub params: GenerationParams,
}

impl GeminiSettings {
    pub fn new(api_key: ApiKeySource) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
            timeout: Duration::from_secs(60),
            json_mode: false,
            params: GenerationParams::DEFAULT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }
}

/// HTTP backend for the generateContent endpoint
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiBackend {
    pub fn new(settings: GeminiSettings) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::Http(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, settings })
    }

    /// Endpoint URL without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.settings.api_key.resolve()?;
        let body = GenerateContentRequest::new(prompt, self.settings.params, self.settings.json_mode);

        debug!(
            endpoint = %self.endpoint(),
            prompt_chars = prompt.chars().count(),
            json_mode = self.settings.json_mode,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Http(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::Http(e.without_url().to_string()))?;
        debug!(status = status.as_u16(), body_bytes = text.len(), "generateContent response received");

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::UnexpectedBody(e.to_string()))?;

        parsed.first_text().ok_or(GenerationError::EmptyCandidate)
    }
}

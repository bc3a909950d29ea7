//! Configuration management for cardassist
//!
//! Config stored at: ~/.config/cardassist/config.json
//!
//! The API key itself is never stored here. It is read from
//! `CARDASSIST_API_KEY`, from `api_key_file`, or from the variable named
//! by `api_key_env` (in that order).

use cardassist_gen::ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use cardassist_gen::{ApiKeySource, GeminiSettings};
use cardassist_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "CARDASSIST_API_KEY";
pub const MODEL_ENV: &str = "CARDASSIST_MODEL";
pub const BASE_URL_ENV: &str = "CARDASSIST_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Generation model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File holding the API key (re-read on every request)
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Request application/json output from the API
    #[serde(default)]
    pub json_mode: bool,

    /// Fail instead of serving the fallback comparison
    #[serde(default)]
    pub strict: bool,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_file: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            json_mode: false,
            strict: false,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cardassist");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default path and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `CARDASSIST_MODEL` / `CARDASSIST_BASE_URL` style overrides.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue("model must not be empty".to_string()).into());
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(format!(
                "base_url must start with http:// or https:// (got {:?})",
                self.base_url
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("timeout_secs must be at least 1".to_string()).into());
        }
        Ok(())
    }

    /// Where the API key is read from, given the current environment.
    /// A blank `CARDASSIST_API_KEY` counts as unset.
    pub fn api_key_source(&self, lookup: impl Fn(&str) -> Option<String>) -> ApiKeySource {
        if lookup(API_KEY_ENV).is_some_and(|v| !v.trim().is_empty()) {
            ApiKeySource::Env(API_KEY_ENV.to_string())
        } else if let Some(ref path) = self.api_key_file {
            ApiKeySource::File(path.clone())
        } else {
            ApiKeySource::Env(self.api_key_env.clone())
        }
    }

    pub fn gemini_settings(&self) -> GeminiSettings {
        GeminiSettings::new(self.api_key_source(|name| std::env::var(name).ok()))
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_json_mode(self.json_mode)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CardAssist Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Model:          {}", self.model)?;
        writeln!(f, "Base URL:       {}", self.base_url)?;
        writeln!(
            f,
            "API key:        {:?}",
            self.api_key_source(|name| std::env::var(name).ok())
        )?;
        writeln!(f, "Timeout:        {}s", self.timeout_secs)?;
        writeln!(f, "JSON mode:      {}", self.json_mode)?;
        writeln!(f, "Strict:         {}", self.strict)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

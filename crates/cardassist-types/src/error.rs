//! Error types for cardassist

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Card selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select both vendor and customer cards (vendor card is missing)")]
    MissingVendor,

    #[error("Please select both vendor and customer cards (customer card is missing)")]
    MissingCustomer,

    #[error("Card index {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Operator sign-in errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Password is required")]
    MissingPassword,

    #[error("Full name is required to sign up")]
    MissingName,
}

/// Coarse classification of a failed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Network failure, missing credential or non-2xx status
    Transport,
    /// Reply is missing expected fields or holds no JSON object
    Shape,
    /// Extracted span is not valid JSON
    Parse,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Shape => "shape",
            FailureKind::Parse => "parse",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison generation errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key available: {0}")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Generation API error: {status}")]
    Status { status: u16, body: String },

    #[error("No candidate text in generation response")]
    EmptyCandidate,

    #[error("Unexpected generation response body: {0}")]
    UnexpectedBody(String),

    #[error("No JSON object found in generated text")]
    NoJsonObject,

    #[error("Generated JSON is malformed: {0}")]
    InvalidJson(String),

    #[error("Generated JSON does not match the comparison schema: {0}")]
    SchemaMismatch(String),
}

impl GenerationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GenerationError::MissingApiKey(_)
            | GenerationError::Http(_)
            | GenerationError::Status { .. } => FailureKind::Transport,
            GenerationError::EmptyCandidate
            | GenerationError::UnexpectedBody(_)
            | GenerationError::NoJsonObject
            | GenerationError::SchemaMismatch(_) => FailureKind::Shape,
            GenerationError::InvalidJson(_) => FailureKind::Parse,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Selection(#[from] SelectionError),

    #[error("Sign-in failed: {0}")]
    Operator(#[from] OperatorError),

    #[error("Comparison generation failed ({kind}): {err}", kind = .0.kind(), err = .0)]
    Generation(#[from] GenerationError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_kinds() {
        assert_eq!(
            GenerationError::Status { status: 503, body: String::new() }.kind(),
            FailureKind::Transport
        );
        assert_eq!(GenerationError::MissingApiKey("env".into()).kind(), FailureKind::Transport);
        assert_eq!(GenerationError::EmptyCandidate.kind(), FailureKind::Shape);
        assert_eq!(GenerationError::NoJsonObject.kind(), FailureKind::Shape);
        assert_eq!(GenerationError::SchemaMismatch("x".into()).kind(), FailureKind::Shape);
        assert_eq!(GenerationError::InvalidJson("x".into()).kind(), FailureKind::Parse);
    }

    #[test]
    fn test_generation_error_display_includes_kind() {
        let err = Error::from(GenerationError::Status { status: 429, body: String::new() });
        assert_eq!(
            err.to_string(),
            "Comparison generation failed (transport): Generation API error: 429"
        );
    }
}

//! Backend seam between the pipeline and a text-generation service

use cardassist_types::GenerationError;
use serde::Serialize;
use std::future::Future;

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    pub const DEFAULT: GenerationParams = GenerationParams {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 2048,
    };
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A service that turns one prompt into generated text.
///
/// Implementations issue exactly one request per call and return the
/// text of the first candidate.
pub trait GenerationBackend {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

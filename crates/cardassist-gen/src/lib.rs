//! Comparison generation - prompt, one API call, JSON extraction, fallback

pub mod ai;
pub mod extract;
pub mod pipeline;

// Re-export main types for convenience
pub use ai::backend::{GenerationBackend, GenerationParams};
pub use ai::gemini::{ApiKeySource, GeminiBackend, GeminiSettings};
pub use ai::prompts::build_comparison_prompt;
pub use extract::extract_json_object;
pub use pipeline::{parse_comparison, ComparisonPipeline};

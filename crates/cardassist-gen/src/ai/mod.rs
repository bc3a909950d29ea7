pub mod backend;
pub mod gemini;
pub mod prompts;
pub mod wire;

/// LLM Client — the text-generation capability used by the resume service.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Callers depend on the `Generator` trait; the concrete backend is built once
/// in `main` and injected.
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod deadline;
pub mod gemini;

pub use deadline::Deadline;
pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generation blocked by backend: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Generation timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Produces output text from user content and a system instruction.
///
/// A successful call always yields non-empty text; a zero-length answer from
/// a backend is reported as `GenerationError::EmptyContent`. Implementations
/// make exactly one backend call per invocation and never retry.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, content: &str, instruction: &str) -> Result<String, GenerationError>;
}

//! Section Service — validates section input, builds the section instruction,
//! and delegates to the injected `Generator`.
//!
//! Deduplication is delegated: the generator is told about prior lines through
//! the instruction. This service does not filter the generator's output.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::llm_client::{GenerationError, Generator};
use crate::resume::sections::SectionKind;

pub const EMPTY_INPUT_MESSAGE: &str = "input cannot be empty";

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Input for one section generation call. Owned by the caller; never stored.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub content: String,
    /// Previously generated lines for this section. Ignored by sections that
    /// do not consume history.
    pub history: Vec<String>,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }
}

#[derive(Clone)]
pub struct SectionService {
    generator: Arc<dyn Generator>,
}

impl SectionService {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Single entry point for every section kind.
    ///
    /// Whitespace-only content counts as empty and is rejected before any
    /// instruction is built. Accepted content is forwarded as given.
    pub async fn generate_section(
        &self,
        kind: SectionKind,
        request: &GenerationRequest,
    ) -> Result<String, SectionError> {
        if request.content.trim().is_empty() {
            return Err(SectionError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let config = kind.config();
        let history: &[String] = if config.requires_history {
            &request.history
        } else {
            &[]
        };
        let instruction = (config.build_instruction)(&request.content, history);

        debug!(
            "Generating {} section: content_len={}, history_lines={}",
            config.kind,
            request.content.len(),
            history.len()
        );

        let text = self
            .generator
            .generate(&request.content, &instruction)
            .await?;

        // A zero-length success breaks the Generator contract; report it as a failure.
        if text.is_empty() {
            return Err(SectionError::Generation(GenerationError::EmptyContent));
        }

        Ok(text)
    }

    /// Generates one experience line that avoids repeating `history`.
    pub async fn generate_experience_line(
        &self,
        content: &str,
        history: &[String],
    ) -> Result<String, SectionError> {
        let request = GenerationRequest::new(content).with_history(history.to_vec());
        self.generate_section(SectionKind::Experience, &request).await
    }

    /// Generates one formatted education block.
    pub async fn generate_education_block(&self, content: &str) -> Result<String, SectionError> {
        self.generate_section(SectionKind::Education, &GenerationRequest::new(content))
            .await
    }
}

//! Gemini backend for the `Generator` capability.
//!
//! One `generateContent` call per generation: the instruction travels as the
//! system instruction, the user content as a single user turn. No retries.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, Generator};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyContent)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(match candidate.finish_reason {
                Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
                    GenerationError::Blocked(reason)
                }
                _ => GenerationError::EmptyContent,
            });
        }

        Ok(text)
    }
}

/// Hosted Gemini text API client. Cheap to clone; build once at startup.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, content: &str, instruction: &str) -> Result<String, GenerationError> {
        let request_body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: content }],
            }],
        };

        let started = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(api_error(status, body));
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: model={}, prompt_tokens={}, output_tokens={}, elapsed_ms={}",
                self.model,
                usage.prompt_token_count,
                usage.candidates_token_count,
                started.elapsed().as_millis()
            );
        }

        parsed.into_text()
    }
}

/// Builds an `Api` error, preferring the message from Gemini's error envelope.
/// An unreadable or empty body falls back to the status reason.
fn api_error(status: StatusCode, body: Option<String>) -> GenerationError {
    let message = match body.filter(|b| !b.trim().is_empty()) {
        Some(body) => serde_json::from_str::<GeminiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body),
        None => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
    };
    GenerationError::Api {
        status: status.as_u16(),
        message,
    }
}

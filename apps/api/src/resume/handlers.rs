//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::{GenerationRequest, SectionKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateSectionRequest {
    pub part: String,
    /// Missing content is treated as empty and rejected by the service.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSectionResponse {
    pub content: String,
}

/// POST /resumes/generate
///
/// Generates one resume section part. `history` is only read for `experience`.
pub async fn handle_generate_section(
    State(state): State<AppState>,
    Json(request): Json<GenerateSectionRequest>,
) -> Result<Json<GenerateSectionResponse>, AppError> {
    let kind = request
        .part
        .parse::<SectionKind>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let content = state
        .sections
        .generate_section(
            kind,
            &GenerationRequest::new(request.content).with_history(request.history),
        )
        .await?;

    Ok(Json(GenerateSectionResponse { content }))
}

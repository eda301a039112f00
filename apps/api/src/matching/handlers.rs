//! Axum route handlers for the Match API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::matching::scorer::MatchResult;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTextRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// The uploaded resume file as received, before format detection.
#[derive(Debug)]
struct ResumeUpload {
    content_type: Option<String>,
    file_name: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/match
///
/// Multipart form: `resume` (PDF, DOCX or plain-text file) and `jobDescription`.
/// Extracts the resume text, then scores it against the JD and the job catalog.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut upload: Option<ResumeUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume upload: {e}"))
                })?;
                upload = Some(ResumeUpload {
                    content_type,
                    file_name,
                    bytes,
                });
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (upload, job_description) = match (upload, job_description) {
        (Some(upload), Some(jd)) if !upload.bytes.is_empty() && !jd.trim().is_empty() => {
            (upload, jd)
        }
        _ => {
            return Err(AppError::Validation(
                "Resume file and job description are required".to_string(),
            ))
        }
    };

    let format = DocumentFormat::detect(upload.content_type.as_deref(), upload.file_name.as_deref())
        .ok_or_else(|| {
            let described = upload
                .content_type
                .clone()
                .unwrap_or_else(|| "unknown content type".to_string());
            warn!(content_type = %described, file_name = ?upload.file_name, "Rejected resume upload");
            AppError::UnsupportedFormat(format!("Unsupported file format: {described}"))
        })?;

    info!(%format, size = upload.bytes.len(), "Extracting resume text");
    let bytes = upload.bytes;
    let resume_text = tokio::task::spawn_blocking(move || extract_text(format, &bytes))
        .await
        .map_err(anyhow::Error::from)??;

    let result = state
        .scorer
        .score(&resume_text, &job_description, &state.catalog)
        .await?;

    Ok(Json(result))
}

/// POST /api/match/text
///
/// Same scoring as `/api/match` for callers that already hold the resume as text.
pub async fn handle_match_text(
    State(state): State<AppState>,
    Json(request): Json<MatchTextRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result = state
        .scorer
        .score(&request.resume_text, &request.job_description, &state.catalog)
        .await?;

    Ok(Json(result))
}

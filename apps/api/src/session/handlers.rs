//! Axum route handlers for the session lifecycle: creation, inspection,
//! reset, job-description entry, resume upload, and the premium gate.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract;
use crate::session::{ResumeDocument, Session, SessionStore};
use crate::state::AppState;

/// Preview is cut at this many characters, matching the quick-preview pane.
const PREVIEW_CHAR_LIMIT: usize = 2000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub premium: bool,
    pub job_description: String,
    pub resume_filename: Option<String>,
    pub has_resume_text: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        let has_resume_text = session
            .resume
            .as_ref()
            .is_some_and(ResumeDocument::has_usable_text);
        SessionView {
            session_id: session.id,
            premium: session.premium,
            job_description: session.job_description,
            resume_filename: session.resume.map(|r| r.filename),
            has_resume_text,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetJobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct PremiumStatus {
    pub premium: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub has_resume_text: bool,
    pub characters: usize,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub filename: String,
    pub preview: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.sessions.create().into())
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.snapshot(session_id)?.into()))
}

/// DELETE /api/v1/sessions/:id
///
/// Explicit reset: destroys every slot the session held.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetJobDescriptionRequest>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .set_job_description(session_id, request.job_description)?;
    Ok(Json(state.sessions.snapshot(session_id)?.into()))
}

/// POST /api/v1/sessions/:id/premium/upgrade
pub async fn handle_upgrade(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PremiumStatus>, AppError> {
    let premium = state.sessions.set_premium(session_id, true)?;
    Ok(Json(PremiumStatus { premium }))
}

/// POST /api/v1/sessions/:id/premium/downgrade
pub async fn handle_downgrade(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PremiumStatus>, AppError> {
    let premium = state.sessions.set_premium(session_id, false)?;
    Ok(Json(PremiumStatus { premium }))
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload; the file arrives in a `resume` field and must be a PDF.
/// Text is extracted immediately and stored alongside the bytes, replacing
/// any previously uploaded resume.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    state.sessions.snapshot(session_id)?;

    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF resumes are accepted".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        upload = Some((filename, bytes));
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation("Upload must contain a 'resume' file field".to_string())
    })?;

    let response = ingest_resume(&state.sessions, session_id, filename, bytes)?;
    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/resume/preview
pub async fn handle_resume_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let session = state.sessions.snapshot(session_id)?;
    let resume = session.resume.ok_or_else(|| {
        AppError::Validation("Please upload a resume before requesting a preview".to_string())
    })?;

    Ok(Json(PreviewResponse {
        filename: resume.filename,
        preview: truncate_for_preview(&resume.text),
    }))
}

/// Extracts text from the uploaded bytes and stores the document. A PDF
/// that cannot be read at all is an extraction error and leaves the session
/// without a new resume.
fn ingest_resume(
    store: &SessionStore,
    session_id: Uuid,
    filename: String,
    bytes: Bytes,
) -> Result<UploadResponse, AppError> {
    let text =
        extract::extract_text(&bytes).map_err(|e| AppError::Extraction(e.to_string()))?;

    let document = ResumeDocument {
        filename: filename.clone(),
        bytes,
        text,
    };
    let has_resume_text = document.has_usable_text();
    let characters = document.text.chars().count();
    store.attach_resume(session_id, document)?;

    Ok(UploadResponse {
        filename,
        has_resume_text,
        characters,
    })
}

fn truncate_for_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_previews_unchanged() {
        let text = "a".repeat(PREVIEW_CHAR_LIMIT);
        assert_eq!(truncate_for_preview(&text), text);
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let text = "b".repeat(PREVIEW_CHAR_LIMIT + 1);
        let preview = truncate_for_preview(&text);
        assert_eq!(preview.len(), PREVIEW_CHAR_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_multibyte_characters() {
        let text = "é".repeat(PREVIEW_CHAR_LIMIT + 10);
        let preview = truncate_for_preview(&text);
        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_unreadable_upload_is_an_extraction_error() {
        let store = SessionStore::new();
        let id = store.create().id;

        let result = ingest_resume(
            &store,
            id,
            "resume.pdf".to_string(),
            Bytes::from_static(b"definitely not a pdf"),
        );

        assert!(matches!(result, Err(AppError::Extraction(_))));
        assert!(store.snapshot(id).unwrap().resume.is_none());
    }
}

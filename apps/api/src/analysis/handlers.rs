//! Axum route handlers for the analysis actions: the three basic analyses,
//! the combined premium run, and the rewrite download artifact.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::compose::compose;
use crate::analysis::templates::AnalysisKind;
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;
use crate::session::Session;
use crate::state::AppState;

/// Shared validation warning, shown before any LLM call is attempted.
pub const MISSING_INPUTS_WARNING: &str = "Please upload a resume and enter a job description";

/// Filename offered for the premium rewrite artifact.
pub const REWRITE_FILENAME: &str = "optimized_resume.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RunAnalysisRequest {
    pub kind: AnalysisKind,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub kind: AnalysisKind,
    pub title: &'static str,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteDownload {
    pub filename: &'static str,
    pub mime_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PremiumRunResponse {
    /// One entry per premium analysis, in the order they were run.
    pub analyses: Vec<AnalysisResponse>,
    pub rewrite_download: RewriteDownload,
}

#[derive(Debug, Deserialize)]
pub struct RewriteArtifactRequest {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/analyses
///
/// Runs one basic analysis. Premium kinds are rejected here regardless of
/// the session's flag — they only run through the combined premium action.
pub async fn handle_run_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RunAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if !AnalysisKind::BASIC.contains(&request.kind) {
        return Err(AppError::Validation(format!(
            "{} is a premium analysis; use the premium run action",
            request.kind.title()
        )));
    }

    let session = state.sessions.snapshot(session_id)?;
    let (job_description, resume_text) = require_inputs(&session)?;

    let result = run_kind(state.llm.as_ref(), request.kind, job_description, resume_text).await?;

    Ok(Json(AnalysisResponse {
        kind: request.kind,
        title: request.kind.title(),
        result,
    }))
}

/// POST /api/v1/sessions/:id/premium/run
///
/// The combined premium action: four sequential completions against the
/// same session snapshot. Total latency is the sum of the four calls —
/// there is deliberately no fan-out.
pub async fn handle_premium_run(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PremiumRunResponse>, AppError> {
    let session = state.sessions.snapshot(session_id)?;
    if !session.premium {
        return Err(AppError::PremiumRequired);
    }
    let (job_description, resume_text) = require_inputs(&session)?;

    let mut analyses = Vec::with_capacity(AnalysisKind::PREMIUM.len());
    for kind in AnalysisKind::PREMIUM {
        let result = run_kind(state.llm.as_ref(), kind, job_description, resume_text).await?;
        analyses.push(AnalysisResponse {
            kind,
            title: kind.title(),
            result,
        });
    }

    Ok(Json(PremiumRunResponse {
        analyses,
        rewrite_download: RewriteDownload {
            filename: REWRITE_FILENAME,
            mime_type: "text/plain",
        },
    }))
}

/// POST /api/v1/artifacts/resume-rewrite
///
/// Wraps a rewrite the client already holds into a downloadable text file.
/// The server keeps no copy — analyses are never cached.
pub async fn handle_rewrite_artifact(
    Json(request): Json<RewriteArtifactRequest>,
) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REWRITE_FILENAME}\""),
            ),
        ],
        request.content,
    )
}

/// Checks the snapshot holds everything an analysis needs: a non-empty job
/// description and a resume whose extracted text is usable. One shared
/// warning covers all missing-input cases.
fn require_inputs(session: &Session) -> Result<(&str, &str), AppError> {
    let resume = session
        .resume
        .as_ref()
        .filter(|r| r.has_usable_text())
        .ok_or_else(|| AppError::Validation(MISSING_INPUTS_WARNING.to_string()))?;

    if session.job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUTS_WARNING.to_string()));
    }

    Ok((&session.job_description, &resume.text))
}

async fn run_kind(
    llm: &dyn CompletionBackend,
    kind: AnalysisKind,
    job_description: &str,
    resume_text: &str,
) -> Result<String, AppError> {
    let prompt = compose(kind, job_description, resume_text);
    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::llm_client::LlmError;
    use crate::session::{ResumeDocument, SessionStore};

    const JD: &str = "Seeking a backend engineer with Go and Kubernetes experience";
    const RESUME_TEXT: &str = "5 years Python, Docker, AWS";
    const REPLY: &str = "Match: 72%. Missing keywords: Go, Kubernetes. Solid foundation overall.";

    /// Records every prompt it receives and answers with a fixed reply.
    struct ScriptedBackend {
        reply: String,
        fail: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                fail: false,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: String::new(),
                fail: true,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(LlmError::EmptyContent);
            }
            Ok(self.reply.clone())
        }
    }

    fn state_with(backend: Arc<ScriptedBackend>) -> AppState {
        AppState {
            sessions: SessionStore::new(),
            llm: backend,
        }
    }

    fn session_with_inputs(state: &AppState, premium: bool) -> Uuid {
        let id = state.sessions.create().id;
        state
            .sessions
            .set_job_description(id, JD.to_string())
            .unwrap();
        state
            .sessions
            .attach_resume(
                id,
                ResumeDocument {
                    filename: "resume.pdf".to_string(),
                    bytes: Bytes::new(),
                    text: RESUME_TEXT.to_string(),
                },
            )
            .unwrap();
        if premium {
            state.sessions.set_premium(id, true).unwrap();
        }
        id
    }

    #[tokio::test]
    async fn test_ats_match_issues_one_call_and_returns_the_reply_unmodified() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = session_with_inputs(&state, false);

        let response = handle_run_analysis(
            State(state),
            Path(id),
            Json(RunAnalysisRequest {
                kind: AnalysisKind::AtsMatch,
            }),
        )
        .await
        .unwrap();

        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(JD));
        assert!(prompts[0].contains(RESUME_TEXT));
        assert!(prompts[0].contains("percentage"));
        assert!(prompts[0].contains("keywords missing"));
        assert!(prompts[0].contains("assessment"));
        assert_eq!(response.0.result, REPLY);
    }

    #[tokio::test]
    async fn test_missing_resume_warns_without_calling_the_llm() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = state.sessions.create().id;
        state
            .sessions
            .set_job_description(id, JD.to_string())
            .unwrap();

        let result = handle_run_analysis(
            State(state),
            Path(id),
            Json(RunAnalysisRequest {
                kind: AnalysisKind::Evaluation,
            }),
        )
        .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_INPUTS_WARNING),
            other => panic!("expected validation warning, got {other:?}"),
        }
        assert!(backend.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_sentinel_resume_text_blocks_analysis() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = state.sessions.create().id;
        state
            .sessions
            .set_job_description(id, JD.to_string())
            .unwrap();
        state
            .sessions
            .attach_resume(
                id,
                ResumeDocument {
                    filename: "scan.pdf".to_string(),
                    bytes: Bytes::new(),
                    text: crate::extract::NO_TEXT_SENTINEL.to_string(),
                },
            )
            .unwrap();

        let result = handle_run_analysis(
            State(state),
            Path(id),
            Json(RunAnalysisRequest {
                kind: AnalysisKind::Evaluation,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(backend.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_premium_kind_is_rejected_on_the_basic_endpoint() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = session_with_inputs(&state, true);

        let result = handle_run_analysis(
            State(state),
            Path(id),
            Json(RunAnalysisRequest {
                kind: AnalysisKind::CareerPath,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(backend.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_premium_run_is_gated_on_the_flag() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = session_with_inputs(&state, false);

        let result = handle_premium_run(State(state), Path(id)).await;

        assert!(matches!(result, Err(AppError::PremiumRequired)));
        assert!(backend.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_premium_run_issues_exactly_four_calls_in_order() {
        let backend = ScriptedBackend::new(REPLY);
        let state = state_with(backend.clone());
        let id = session_with_inputs(&state, true);

        let response = handle_premium_run(State(state), Path(id)).await.unwrap();

        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].contains("career paths"));
        assert!(prompts[1].contains("salary benchmark"));
        assert!(prompts[2].contains("typical candidates"));
        assert!(prompts[3].contains("Rewrite this resume"));
        for prompt in &prompts {
            assert!(prompt.contains(JD));
            assert!(prompt.contains(RESUME_TEXT));
        }

        let analyses = &response.0.analyses;
        assert_eq!(analyses.len(), 4);
        assert_eq!(analyses[3].kind, AnalysisKind::ResumeRewrite);
        assert_eq!(analyses[3].result, REPLY);
        assert_eq!(response.0.rewrite_download.filename, REWRITE_FILENAME);
        assert_eq!(response.0.rewrite_download.mime_type, "text/plain");
    }

    #[tokio::test]
    async fn test_llm_failure_surfaces_as_llm_error() {
        let backend = ScriptedBackend::failing();
        let state = state_with(backend.clone());
        let id = session_with_inputs(&state, false);

        let result = handle_run_analysis(
            State(state),
            Path(id),
            Json(RunAnalysisRequest {
                kind: AnalysisKind::Evaluation,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Llm(_))));
        assert_eq!(backend.prompts().len(), 1);
    }
}

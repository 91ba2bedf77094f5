//! HTTP handlers and wire DTOs for the assessment flow. Thin by design:
//! every domain decision lives in `session`, `catalog`, or `scoring`.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::assessment::catalog::Catalog;
use crate::assessment::session::{Advance, AssessmentSession};
use crate::errors::AppError;
use crate::models::question::{Dimension, Question, SectionKind};
use crate::models::results::AssessmentResults;
use crate::scoring;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Wire DTOs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub index: usize,
    pub id: SectionKind,
    pub title: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

/// Client view of a question. Option weights are scoring configuration and
/// are withheld from the wire.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub section: SectionKind,
    pub dimension: Dimension,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    fn of(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            section: question.section,
            dimension: question.dimension,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|o| OptionView {
                    value: o.value.clone(),
                    label: o.label.clone(),
                })
                .collect(),
        }
    }
}

/// Everything a client needs to render the current position of a session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub section_index: usize,
    pub question_index: usize,
    pub section_title: &'static str,
    pub question: QuestionView,
    /// The answer already recorded for the current question, if any.
    pub selected: Option<String>,
    pub can_advance: bool,
    pub progress: f64,
    pub answered: usize,
    pub question_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvanceResponse {
    InProgress {
        #[serde(flatten)]
        snapshot: SessionSnapshot,
    },
    Complete {
        results: AssessmentResults,
    },
}

fn snapshot(catalog: &Catalog, session: &AssessmentSession) -> Option<SessionSnapshot> {
    let question = session.current_question(catalog)?;
    Some(SessionSnapshot {
        session_id: session.id,
        section_index: session.section_index(),
        question_index: session.question_index(),
        section_title: catalog.section_at(session.section_index()).title(),
        question: QuestionView::of(question),
        selected: session.current_answer(catalog).map(str::to_string),
        can_advance: session.can_advance(catalog),
        progress: session.progress_percent(catalog),
        answered: session.answers().len(),
        question_count: catalog.question_count(),
    })
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn session_complete() -> AppError {
    AppError::Conflict("session is already complete".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/sections
pub async fn handle_list_sections(State(state): State<AppState>) -> Json<Vec<SectionInfo>> {
    let sections = (0..state.catalog.section_count())
        .map(|index| {
            let kind = state.catalog.section_at(index);
            SectionInfo {
                index,
                id: kind,
                title: kind.title(),
                question_count: state.catalog.questions_for_section(index).len(),
            }
        })
        .collect();
    Json(sections)
}

/// POST /api/v1/assessment/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let catalog = state.catalog.clone();
    let id = state.sessions.create().await;
    tracing::info!("assessment session {id} started");

    let snap = state
        .sessions
        .with_session(id, |s| snapshot(&catalog, s))
        .await
        .flatten()
        .ok_or_else(|| AppError::Internal(anyhow!("freshly created session vanished")))?;
    Ok((StatusCode::CREATED, Json(snap)))
}

/// GET /api/v1/assessment/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let catalog = state.catalog.clone();
    let snap = state
        .sessions
        .with_session(id, |s| snapshot(&catalog, s))
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(session_complete)?;
    Ok(Json(snap))
}

/// POST /api/v1/assessment/sessions/:id/answer
pub async fn handle_record_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let catalog = state.catalog.clone();
    let recorded = state
        .sessions
        .with_session(id, |s| {
            s.record_answer(&catalog, &req.value)
                .map(|()| snapshot(&catalog, s))
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    let snap = recorded?.ok_or_else(session_complete)?;
    Ok(Json(snap))
}

/// POST /api/v1/assessment/sessions/:id/next
///
/// A blocked advance (unanswered current question) is a 409, not a silent
/// echo of the unchanged snapshot. On the terminal transition the session is
/// scored, removed from the store, and the full results are returned.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>, AppError> {
    enum Step {
        Blocked,
        Moved(Option<SessionSnapshot>),
        Completed(BTreeMap<String, String>),
    }

    let catalog = state.catalog.clone();
    let step = state
        .sessions
        .with_session(id, |s| match s.advance(&catalog) {
            Advance::Blocked => Step::Blocked,
            Advance::Moved => Step::Moved(snapshot(&catalog, s)),
            Advance::Completed => Step::Completed(s.answers().clone()),
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    match step {
        Step::Blocked => Err(AppError::Conflict(
            "answer the current question before advancing".to_string(),
        )),
        Step::Moved(snap) => {
            let snapshot =
                snap.ok_or_else(|| AppError::Internal(anyhow!("moved session has no question")))?;
            Ok(Json(AdvanceResponse::InProgress { snapshot }))
        }
        Step::Completed(answers) => {
            state.sessions.remove(id).await;
            let results = scoring::score(&catalog, &answers);
            tracing::info!(
                "assessment session {id} complete: overall {} ({:?})",
                results.overall_score,
                results.recommendation
            );
            Ok(Json(AdvanceResponse::Complete { results }))
        }
    }
}

/// POST /api/v1/assessment/sessions/:id/previous
///
/// Retreat at the first question of the first section is a designed no-op;
/// the unchanged snapshot is returned rather than an error.
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let catalog = state.catalog.clone();
    let snap = state
        .sessions
        .with_session(id, |s| {
            s.retreat(&catalog);
            snapshot(&catalog, s)
        })
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(session_complete)?;
    Ok(Json(snap))
}

//! Handlers for `/curricula/{id}/subjects`: subjects placed into a
//! curriculum.
//!
//! A subject may sit under one of the curriculum's own knowledge-block
//! links or stay unassigned. Each subject appears at most once per
//! curriculum.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::curriculum::{validate_subject_type, SUBJECT_TYPE_REQUIRED};
use curricula_core::types::DbId;
use curricula_db::models::curriculum_subject::{
    CreateCurriculumSubject, CurriculumSubject, CurriculumSubjectDetail, UpdateCurriculumSubject,
};
use curricula_db::repositories::{
    CurriculumKnowledgeBlockRepo, CurriculumRepo, CurriculumSubjectRepo, SubjectRepo,
};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::curriculum::ensure_curriculum;
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject a link id that does not belong to `curriculum_id`.
async fn ensure_own_link(state: &AppState, curriculum_id: DbId, link_id: DbId) -> AppResult<()> {
    match CurriculumKnowledgeBlockRepo::find(&state.pool, curriculum_id, link_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::validation(format!(
            "Knowledge block link {link_id} does not belong to curriculum {curriculum_id}"
        ))),
    }
}

/// GET /api/v1/curricula/{id}/subjects
pub async fn list(
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CurriculumSubjectDetail>>>> {
    let detail = CurriculumRepo::find_detail(&state.pool, curriculum_id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", curriculum_id))?;
    Ok(Json(DataResponse {
        data: detail.subjects,
    }))
}

/// POST /api/v1/curricula/{id}/subjects
///
/// `type` defaults to `Required`; credits default to the catalog subject's.
pub async fn create(
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateCurriculumSubject>,
) -> AppResult<(StatusCode, Json<DataResponse<CurriculumSubject>>)> {
    let subject_type = input
        .subject_type
        .as_deref()
        .unwrap_or(SUBJECT_TYPE_REQUIRED);
    validate_subject_type(subject_type)?;

    ensure_curriculum(&state, curriculum_id).await?;
    if SubjectRepo::find_by_id(&state.pool, input.subject_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Subject", input.subject_id));
    }
    if let Some(link_id) = input.curriculum_knowledge_block_id {
        ensure_own_link(&state, curriculum_id, link_id).await?;
    }

    let assignment =
        CurriculumSubjectRepo::create(&state.pool, curriculum_id, subject_type, &input).await?;
    tracing::info!(
        curriculum_id,
        assignment_id = assignment.id,
        subject_id = assignment.subject_id,
        "Subject assigned to curriculum"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: assignment })))
}

/// PUT /api/v1/curricula/{id}/subjects/{assignment_id}
///
/// `curriculumKnowledgeBlockId: null` detaches the subject from its block.
pub async fn update(
    State(state): State<AppState>,
    Path((curriculum_id, assignment_id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateCurriculumSubject>,
) -> AppResult<Json<DataResponse<CurriculumSubject>>> {
    if let Some(subject_type) = input.subject_type.as_deref() {
        validate_subject_type(subject_type)?;
    }
    if let Some(Some(link_id)) = input.curriculum_knowledge_block_id {
        ensure_own_link(&state, curriculum_id, link_id).await?;
    }

    let assignment =
        CurriculumSubjectRepo::update(&state.pool, curriculum_id, assignment_id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("CurriculumSubject", assignment_id))?;
    Ok(Json(DataResponse { data: assignment }))
}

/// DELETE /api/v1/curricula/{id}/subjects/{assignment_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((curriculum_id, assignment_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CurriculumSubjectRepo::delete(&state.pool, curriculum_id, assignment_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("CurriculumSubject", assignment_id))
    }
}

//! Handlers for the `/curricula` resource: CRUD, the detail view, status
//! transitions and the credit summary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::curriculum::{
    summarize_credits, validate_approver, validate_status, validate_transition, CreditSummary,
};
use curricula_core::types::DbId;
use curricula_db::models::curriculum::{
    CreateCurriculum, Curriculum, CurriculumDetail, TransitionCurriculumStatus, UpdateCurriculum,
};
use curricula_db::repositories::CurriculumRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::CurriculumListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a curriculum row or fail with 404.
pub(crate) async fn ensure_curriculum(state: &AppState, id: DbId) -> AppResult<Curriculum> {
    CurriculumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", id))
}

/// POST /api/v1/curricula
///
/// New curricula always start in `Draft`.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCurriculum>,
) -> AppResult<(StatusCode, Json<DataResponse<Curriculum>>)> {
    let curriculum = CurriculumRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = curriculum.id,
        major_id = curriculum.major_id,
        code = %curriculum.code,
        "Curriculum created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: curriculum })))
}

/// GET /api/v1/curricula?majorId=&status=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CurriculumListParams>,
) -> AppResult<Json<DataResponse<Vec<Curriculum>>>> {
    if let Some(status) = params.status.as_deref() {
        validate_status(status)?;
    }
    let curricula =
        CurriculumRepo::list(&state.pool, params.major_id, params.status.as_deref()).await?;
    Ok(Json(DataResponse { data: curricula }))
}

/// GET /api/v1/curricula/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CurriculumDetail>>> {
    let detail = CurriculumRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/curricula/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCurriculum>,
) -> AppResult<Json<DataResponse<Curriculum>>> {
    let curriculum = CurriculumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", id))?;
    Ok(Json(DataResponse { data: curriculum }))
}

/// DELETE /api/v1/curricula/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CurriculumRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Curriculum deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Curriculum", id))
    }
}

/// POST /api/v1/curricula/{id}/status
///
/// Moves the curriculum along its approval lifecycle. Entering `Approved`
/// requires `approvedBy`.
pub async fn transition_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<TransitionCurriculumStatus>,
) -> AppResult<Json<DataResponse<Curriculum>>> {
    validate_status(&input.status)?;
    let current = ensure_curriculum(&state, id).await?;
    validate_transition(&current.status, &input.status)?;

    let approved_by = input.approved_by.as_deref().map(str::trim);
    validate_approver(&input.status, approved_by)?;

    let curriculum = CurriculumRepo::set_status(&state.pool, id, &input.status, approved_by)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", id))?;
    tracing::info!(
        id,
        from = %current.status,
        to = %curriculum.status,
        "Curriculum status changed"
    );
    Ok(Json(DataResponse { data: curriculum }))
}

/// GET /api/v1/curricula/{id}/summary
pub async fn credit_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CreditSummary>>> {
    let curriculum = ensure_curriculum(&state, id).await?;
    let (links, assignments) = CurriculumRepo::credit_inputs(&state.pool, id).await?;
    let summary = summarize_credits(curriculum.total_credits, &links, &assignments);
    Ok(Json(DataResponse { data: summary }))
}

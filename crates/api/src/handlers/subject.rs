//! Handlers for the `/subjects` catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::subject::{CreateSubject, Subject, UpdateSubject};
use curricula_db::repositories::SubjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::FacultyScopedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/subjects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSubject>,
) -> AppResult<(StatusCode, Json<DataResponse<Subject>>)> {
    let created = SubjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "Subject created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/subjects?facultyId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FacultyScopedParams>,
) -> AppResult<Json<DataResponse<Vec<Subject>>>> {
    let items = SubjectRepo::list(&state.pool, params.faculty_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/subjects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Subject>>> {
    let item = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Subject", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/subjects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSubject>,
) -> AppResult<Json<DataResponse<Subject>>> {
    let item = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Subject", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/subjects/{id}
///
/// Refused with `INVALID_REFERENCE` while any curriculum assigns the subject.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SubjectRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Subject deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Subject", id))
    }
}

//! Handlers for the `/lecturers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};
use curricula_db::repositories::LecturerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::FacultyScopedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/lecturers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLecturer>,
) -> AppResult<(StatusCode, Json<DataResponse<Lecturer>>)> {
    let created = LecturerRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "Lecturer created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/lecturers?facultyId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FacultyScopedParams>,
) -> AppResult<Json<DataResponse<Vec<Lecturer>>>> {
    let items = LecturerRepo::list(&state.pool, params.faculty_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/lecturers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Lecturer>>> {
    let item = LecturerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Lecturer", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/lecturers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLecturer>,
) -> AppResult<Json<DataResponse<Lecturer>>> {
    let item = LecturerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Lecturer", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/lecturers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LecturerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Lecturer", id))
    }
}

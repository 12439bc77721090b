//! Handlers for the `/faculties` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};
use curricula_db::repositories::FacultyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::FacultyListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/faculties
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFaculty>,
) -> AppResult<(StatusCode, Json<DataResponse<Faculty>>)> {
    let created = FacultyRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "Faculty created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/faculties?schoolId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FacultyListParams>,
) -> AppResult<Json<DataResponse<Vec<Faculty>>>> {
    let items = FacultyRepo::list(&state.pool, params.school_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/faculties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Faculty>>> {
    let item = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Faculty", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/faculties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFaculty>,
) -> AppResult<Json<DataResponse<Faculty>>> {
    let item = FacultyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Faculty", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/faculties/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FacultyRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Faculty deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Faculty", id))
    }
}

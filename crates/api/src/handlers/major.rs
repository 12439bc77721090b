//! Handlers for the `/majors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::major::{CreateMajor, Major, UpdateMajor};
use curricula_db::repositories::MajorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::FacultyScopedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/majors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMajor>,
) -> AppResult<(StatusCode, Json<DataResponse<Major>>)> {
    let created = MajorRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "Major created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/majors?facultyId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FacultyScopedParams>,
) -> AppResult<Json<DataResponse<Vec<Major>>>> {
    let items = MajorRepo::list(&state.pool, params.faculty_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/majors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Major>>> {
    let item = MajorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Major", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/majors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMajor>,
) -> AppResult<Json<DataResponse<Major>>> {
    let item = MajorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Major", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/majors/{id}
///
/// Cascades to the major's curricula.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MajorRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Major deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Major", id))
    }
}

//! Handlers for the `/universities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::university::{CreateUniversity, University, UpdateUniversity};
use curricula_db::repositories::UniversityRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/universities
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUniversity>,
) -> AppResult<(StatusCode, Json<DataResponse<University>>)> {
    let university = UniversityRepo::create(&state.pool, &input).await?;
    tracing::info!(id = university.id, code = %university.code, "University created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: university })))
}

/// GET /api/v1/universities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<University>>>> {
    let universities = UniversityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: universities }))
}

/// GET /api/v1/universities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<University>>> {
    let university = UniversityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("University", id))?;
    Ok(Json(DataResponse { data: university }))
}

/// PUT /api/v1/universities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUniversity>,
) -> AppResult<Json<DataResponse<University>>> {
    let university = UniversityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("University", id))?;
    Ok(Json(DataResponse { data: university }))
}

/// DELETE /api/v1/universities/{id}
///
/// Cascades to the university's schools, faculties and everything below.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if UniversityRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "University deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("University", id))
    }
}

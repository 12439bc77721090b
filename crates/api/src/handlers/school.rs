//! Handlers for the `/schools` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::school::{CreateSchool, School, UpdateSchool};
use curricula_db::repositories::SchoolRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::SchoolListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/schools
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSchool>,
) -> AppResult<(StatusCode, Json<DataResponse<School>>)> {
    let created = SchoolRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, code = %created.code, "School created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/schools?universityId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SchoolListParams>,
) -> AppResult<Json<DataResponse<Vec<School>>>> {
    let items = SchoolRepo::list(&state.pool, params.university_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/schools/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<School>>> {
    let item = SchoolRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("School", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/schools/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSchool>,
) -> AppResult<Json<DataResponse<School>>> {
    let item = SchoolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("School", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/schools/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SchoolRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "School deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("School", id))
    }
}

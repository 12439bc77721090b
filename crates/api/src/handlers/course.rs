//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::course::{Course, CreateCourse, UpdateCourse};
use curricula_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::CourseListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<DataResponse<Course>>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = course.id,
        subject_id = course.subject_id,
        academic_year = %course.academic_year,
        "Course created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// GET /api/v1/courses?subjectId=&lecturerId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let courses = CourseRepo::list(&state.pool, params.subject_id, params.lecturer_id).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Course", id))?;
    Ok(Json(DataResponse { data: course }))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Course", id))?;
    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CourseRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Course", id))
    }
}

//! Course entity model and DTOs. A course is one offering of a subject in
//! a semester, optionally taught by a lecturer.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DbId,
    pub subject_id: DbId,
    pub lecturer_id: Option<DbId>,
    pub code: String,
    pub semester: i32,
    pub academic_year: String,
    pub max_students: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    pub subject_id: DbId,
    pub lecturer_id: Option<DbId>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(range(min = 1, max = 3))]
    pub semester: i32,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    #[validate(range(min = 1))]
    pub max_students: Option<i32>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    pub subject_id: Option<DbId>,
    pub lecturer_id: Option<DbId>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(range(min = 1, max = 3))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: Option<String>,
    #[validate(range(min = 1))]
    pub max_students: Option<i32>,
}

//! Lecturer entity model and DTOs.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `lecturers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub id: DbId,
    pub faculty_id: DbId,
    pub full_name: String,
    pub code: String,
    pub email: String,
    pub phone: Option<String>,
    pub academic_title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new lecturer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLecturer {
    pub faculty_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub academic_title: Option<String>,
}

/// DTO for updating an existing lecturer. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLecturer {
    pub faculty_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub academic_title: Option<String>,
}

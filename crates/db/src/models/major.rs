//! Major entity model and DTOs. A major belongs to one faculty and owns
//! its curricula.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `majors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    pub id: DbId,
    pub faculty_id: DbId,
    pub name: String,
    pub code: String,
    pub degree_level: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identifying fields of a major, embedded in curriculum detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorSummary {
    pub id: DbId,
    pub faculty_id: DbId,
    pub name: String,
    pub code: String,
}

/// DTO for creating a new major.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMajor {
    pub faculty_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(length(max = 100))]
    pub degree_level: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// DTO for updating an existing major. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMajor {
    pub faculty_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(length(max = 100))]
    pub degree_level: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

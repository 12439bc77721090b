//! Subject catalog entity model and DTOs.
//!
//! Subjects are shared across curricula; a curriculum references them via
//! `curriculum_subjects` and never copies them.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: DbId,
    pub faculty_id: Option<DbId>,
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub theory_hours: Option<i32>,
    pub practice_hours: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identifying fields of a subject, embedded in curriculum detail views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub credits: i32,
}

/// DTO for creating a new subject.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubject {
    pub faculty_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(range(min = 0, max = 30))]
    pub credits: i32,
    #[validate(range(min = 0))]
    pub theory_hours: Option<i32>,
    #[validate(range(min = 0))]
    pub practice_hours: Option<i32>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// DTO for updating an existing subject. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubject {
    pub faculty_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(range(min = 0, max = 30))]
    pub credits: Option<i32>,
    #[validate(range(min = 0))]
    pub theory_hours: Option<i32>,
    #[validate(range(min = 0))]
    pub practice_hours: Option<i32>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

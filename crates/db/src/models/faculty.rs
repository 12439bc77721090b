//! Faculty entity model and DTOs. A faculty belongs to one school.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `faculties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: DbId,
    pub school_id: DbId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new faculty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaculty {
    pub school_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// DTO for updating an existing faculty. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaculty {
    pub school_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

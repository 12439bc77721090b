//! University entity model and DTOs.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `universities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new university.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniversity {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// DTO for updating an existing university. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUniversity {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

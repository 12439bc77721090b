//! Shared rules for catalog entities (universities, schools, faculties,
//! majors, subjects, lecturers, courses, knowledge blocks).
//!
//! Codes are short human-facing identifiers used for uniqueness checks, so
//! they are restricted to a URL- and filename-safe alphabet.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an entity code.
pub const MAX_CODE_LENGTH: usize = 50;

/// Maximum length of an entity name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a free-text description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Upper bound on credits carried by a single subject.
pub const MAX_SUBJECT_CREDITS: i32 = 30;

/// Upper bound on total credits of a curriculum or knowledge block.
pub const MAX_PROGRAM_CREDITS: i32 = 500;

const CODE_PATTERN: &str = r"^[A-Za-z0-9._-]+$";

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CODE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether `code` uses only letters, digits, `.`, `_` and `-`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_RE.is_match(code)
}

/// `validator` hook for code fields on request DTOs.
pub fn validate_code_format(code: &str) -> Result<(), ValidationError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        let mut err = ValidationError::new("code_format");
        err.message = Some("code may only contain letters, digits, '.', '_' and '-'".into());
        Err(err)
    }
}

/// Validate a `[min, max]` credit range. Either bound may be absent.
pub fn validate_credit_range(min: Option<i32>, max: Option<i32>) -> Result<(), CoreError> {
    if let Some(min) = min {
        if min < 0 {
            return Err(CoreError::Validation(format!(
                "minCredits must not be negative, got {min}"
            )));
        }
    }
    if let Some(max) = max {
        if max > MAX_PROGRAM_CREDITS {
            return Err(CoreError::Validation(format!(
                "maxCredits must not exceed {MAX_PROGRAM_CREDITS}, got {max}"
            )));
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "minCredits ({min}) must not exceed maxCredits ({max})"
            )));
        }
    }
    Ok(())
}

/// Trim a required text input, rejecting blank values.
pub fn require_non_blank(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

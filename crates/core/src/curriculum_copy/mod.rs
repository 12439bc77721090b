//! Curriculum copy / versioning workflow.
//!
//! A copy clones a curriculum, its knowledge-block links and its subject
//! assignments under a new code, in three ordered steps:
//!
//! 1. load a normalized [`CurriculumSnapshot`] of the source,
//! 2. [`builder::build_target`] inserts the new curriculum and links and
//!    returns the old-link -> new-link mapping,
//! 3. [`remapper::remap_assignments`] inserts the assignments, translating
//!    each link reference through that mapping.
//!
//! Steps 2 and 3 share one [`CopyTransaction`]; any failure drops it
//! uncommitted, so a failed copy leaves no rows behind.

pub mod builder;
pub mod remapper;
pub mod store;

#[cfg(test)]
mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{require_non_blank, validate_code_format};
use crate::error::CoreError;
use crate::types::DbId;

pub use store::{CopyTransaction, CurriculumCopyStore, CurriculumSnapshot};

// ---------------------------------------------------------------------------
// Request / command
// ---------------------------------------------------------------------------

/// Raw request body of `POST /curricula/{id}/copy`.
///
/// Fields are optional so a missing field produces a validation error
/// rather than a deserialization failure. Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CopyCurriculumRequest {
    #[validate(length(max = 255))]
    pub new_name: Option<String>,
    #[validate(length(max = 50), custom(function = "validate_code_format"))]
    pub new_code: Option<String>,
    #[validate(length(max = 20))]
    pub new_academic_year: Option<String>,
}

/// Validated copy parameters. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCurriculumCommand {
    pub new_name: String,
    pub new_code: String,
    pub new_academic_year: String,
}

fn required(field: &str, value: Option<&String>) -> Result<String, CoreError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

impl TryFrom<CopyCurriculumRequest> for CopyCurriculumCommand {
    type Error = CoreError;

    fn try_from(request: CopyCurriculumRequest) -> Result<Self, Self::Error> {
        let new_name = required("newName", request.new_name.as_ref())?;
        let new_code = required("newCode", request.new_code.as_ref())?;
        let new_academic_year = required("newAcademicYear", request.new_academic_year.as_ref())?;

        request
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(Self {
            new_name,
            new_code,
            new_academic_year,
        })
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Step of the workflow, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    Load,
    BuildTarget,
    Remap,
    Commit,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CopyStage::Load => "load",
            CopyStage::BuildTarget => "build_target",
            CopyStage::Remap => "remap",
            CopyStage::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// Prefix internal errors with the stage that raised them. Domain errors
/// (not found, validation, conflict) pass through untouched.
fn at_stage(stage: CopyStage) -> impl FnOnce(CoreError) -> CoreError {
    move |err| match err {
        CoreError::Internal(msg) => CoreError::Internal(format!("copy failed at {stage}: {msg}")),
        other => other,
    }
}

/// Summary of a completed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOutcome {
    pub source_id: DbId,
    pub curriculum_id: DbId,
    pub knowledge_block_links: usize,
    pub subject_assignments: usize,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Load and normalize the source snapshot, or fail with `NotFound`.
pub async fn load_source<S: CurriculumCopyStore>(
    store: &S,
    source_id: DbId,
) -> Result<CurriculumSnapshot, CoreError> {
    let mut snapshot = store
        .load_snapshot(source_id)
        .await
        .map_err(at_stage(CopyStage::Load))?
        .ok_or(CoreError::NotFound {
            entity: "Curriculum",
            id: source_id,
        })?;
    snapshot.normalize();
    Ok(snapshot)
}

/// Copy curriculum `source_id` according to `command`.
pub async fn copy_curriculum<S: CurriculumCopyStore>(
    store: &S,
    source_id: DbId,
    command: &CopyCurriculumCommand,
) -> Result<CopyOutcome, CoreError> {
    let snapshot = load_source(store, source_id).await?;
    let major_id = snapshot.curriculum.major_id;

    // Early exit only; the unique constraint hit during insert is what
    // decides a race between concurrent copies.
    if store
        .code_exists(major_id, &command.new_code)
        .await
        .map_err(at_stage(CopyStage::Load))?
    {
        return Err(CoreError::Conflict(format!(
            "Curriculum code '{}' already exists for major {major_id}",
            command.new_code
        )));
    }

    let mut tx = store.begin().await.map_err(at_stage(CopyStage::BuildTarget))?;

    let target = builder::build_target(&mut tx, &snapshot, command)
        .await
        .map_err(at_stage(CopyStage::BuildTarget))?;

    let subject_assignments = remapper::remap_assignments(&mut tx, &snapshot, &target)
        .await
        .map_err(at_stage(CopyStage::Remap))?;

    tx.commit().await.map_err(at_stage(CopyStage::Commit))?;

    Ok(CopyOutcome {
        source_id,
        curriculum_id: target.curriculum_id,
        knowledge_block_links: target.links.len(),
        subject_assignments,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Curriculum status and subject-type constants, status transitions, and
//! credit summary computation.
//!
//! Statuses and subject types are stored as text, so the values here must
//! match the `CHECK` constraints in the `curricula` and `curriculum_subjects`
//! migrations.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Newly created or copied curriculum, freely editable.
pub const STATUS_DRAFT: &str = "Draft";
/// Submitted for approval.
pub const STATUS_PENDING_APPROVAL: &str = "PendingApproval";
/// Approved by the academic board.
pub const STATUS_APPROVED: &str = "Approved";
/// In force for enrolled cohorts.
pub const STATUS_ACTIVE: &str = "Active";
/// Retired; kept for historical cohorts.
pub const STATUS_ARCHIVED: &str = "Archived";

/// All valid curriculum statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_PENDING_APPROVAL,
    STATUS_APPROVED,
    STATUS_ACTIVE,
    STATUS_ARCHIVED,
];

/// Version assigned to every freshly created copy.
pub const INITIAL_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// Subject type constants
// ---------------------------------------------------------------------------

/// Subject every student must take.
pub const SUBJECT_TYPE_REQUIRED: &str = "Required";
/// Subject chosen from a pool.
pub const SUBJECT_TYPE_ELECTIVE: &str = "Elective";

/// All valid subject assignment types.
pub const VALID_SUBJECT_TYPES: &[&str] = &[SUBJECT_TYPE_REQUIRED, SUBJECT_TYPE_ELECTIVE];

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `Draft`           -> `PendingApproval`, `Archived`
/// - `PendingApproval` -> `Approved`, `Draft` (rejected)
/// - `Approved`        -> `Active`, `Archived`
/// - `Active`          -> `Archived`
/// - `Archived`        -> (terminal)
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_DRAFT => &[STATUS_PENDING_APPROVAL, STATUS_ARCHIVED],
        STATUS_PENDING_APPROVAL => &[STATUS_APPROVED, STATUS_DRAFT],
        STATUS_APPROVED => &[STATUS_ACTIVE, STATUS_ARCHIVED],
        STATUS_ACTIVE => &[STATUS_ARCHIVED],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition curriculum from '{current}' to '{next}'. \
             Allowed transitions: {allowed:?}"
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid curriculum status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

/// Validate that a subject type is `Required` or `Elective`.
pub fn validate_subject_type(subject_type: &str) -> Result<(), CoreError> {
    if VALID_SUBJECT_TYPES.contains(&subject_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid subject type '{subject_type}'. Must be one of: {VALID_SUBJECT_TYPES:?}"
        )))
    }
}

/// Approval requires a named approver when entering `Approved`.
pub fn validate_approver(next: &str, approved_by: Option<&str>) -> Result<(), CoreError> {
    if next == STATUS_APPROVED && approved_by.map_or(true, |s| s.trim().is_empty()) {
        return Err(CoreError::Validation(
            "approvedBy is required when approving a curriculum".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Credit summary
// ---------------------------------------------------------------------------

/// Input row for [`summarize_credits`]: one knowledge-block link.
#[derive(Debug, Clone)]
pub struct LinkCredits {
    pub link_id: DbId,
    pub knowledge_block_id: DbId,
    pub required_credits: i32,
}

/// Input row for [`summarize_credits`]: one subject assignment.
#[derive(Debug, Clone)]
pub struct AssignmentCredits {
    pub link_id: Option<DbId>,
    pub credits: i32,
}

/// Assigned vs. required credits for one knowledge-block link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCreditSummary {
    pub link_id: DbId,
    pub knowledge_block_id: DbId,
    pub required_credits: i32,
    pub assigned_credits: i32,
    pub subject_count: usize,
    pub satisfied: bool,
}

/// Credit totals for a whole curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub total_credits: Option<i32>,
    pub assigned_credits: i32,
    pub unassigned_credits: i32,
    pub blocks: Vec<BlockCreditSummary>,
    pub satisfied: bool,
}

/// Sum assignment credits per knowledge-block link and compare with targets.
///
/// Block order follows `links`. Credits of assignments without a link, or
/// whose link is not in `links`, count toward `unassigned_credits`. The
/// curriculum is satisfied when every block meets its requirement and, if
/// `total_credits` is set, the overall assigned credits reach it.
pub fn summarize_credits(
    total_credits: Option<i32>,
    links: &[LinkCredits],
    assignments: &[AssignmentCredits],
) -> CreditSummary {
    let mut per_link: HashMap<DbId, (i32, usize)> = HashMap::with_capacity(links.len());
    for link in links {
        per_link.insert(link.link_id, (0, 0));
    }

    let mut assigned_credits = 0;
    let mut unassigned_credits = 0;
    for assignment in assignments {
        assigned_credits += assignment.credits;
        match assignment.link_id.and_then(|id| per_link.get_mut(&id)) {
            Some(entry) => {
                entry.0 += assignment.credits;
                entry.1 += 1;
            }
            None => unassigned_credits += assignment.credits,
        }
    }

    let blocks: Vec<BlockCreditSummary> = links
        .iter()
        .map(|link| {
            let (assigned, count) = per_link.get(&link.link_id).copied().unwrap_or((0, 0));
            BlockCreditSummary {
                link_id: link.link_id,
                knowledge_block_id: link.knowledge_block_id,
                required_credits: link.required_credits,
                assigned_credits: assigned,
                subject_count: count,
                satisfied: assigned >= link.required_credits,
            }
        })
        .collect();

    let satisfied = blocks.iter().all(|b| b.satisfied)
        && total_credits.map_or(true, |total| assigned_credits >= total);

    CreditSummary {
        total_credits,
        assigned_credits,
        unassigned_credits,
        blocks,
        satisfied,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

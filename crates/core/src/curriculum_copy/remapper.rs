//! Reference remapper: re-creates subject assignments under the new
//! curriculum, pointing them at the new knowledge-block links.

use crate::error::CoreError;

use super::builder::BuiltTarget;
use super::store::{CopyTransaction, CurriculumSnapshot, NewAssignmentRow, SourceAssignment};

/// The row that replaces `assignment` under the new curriculum.
pub fn remapped_row(
    assignment: &SourceAssignment,
    target: &BuiltTarget,
) -> Result<NewAssignmentRow, CoreError> {
    Ok(NewAssignmentRow {
        curriculum_id: target.curriculum_id,
        subject_id: assignment.subject_id,
        link_id: target.links.resolve(assignment.link_id)?,
        subject_type: assignment.subject_type.clone(),
        credits: assignment.credits,
        semester: assignment.semester,
        prerequisite: assignment.prerequisite.clone(),
        co_requisite: assignment.co_requisite.clone(),
        order: assignment.order,
    })
}

/// Insert every assignment of the snapshot in loader order.
///
/// Stops at the first failure; the caller's transaction discards whatever
/// was inserted before it. Returns the number of rows created.
pub async fn remap_assignments<T: CopyTransaction>(
    tx: &mut T,
    snapshot: &CurriculumSnapshot,
    target: &BuiltTarget,
) -> Result<usize, CoreError> {
    let mut created = 0;
    for assignment in &snapshot.assignments {
        let row = remapped_row(assignment, target)?;
        tx.insert_assignment(&row).await.map_err(|e| match e {
            CoreError::Conflict(msg) => CoreError::Internal(format!(
                "subject {} ({}) could not be copied: {msg}",
                assignment.subject_id, assignment.subject_code
            )),
            other => other,
        })?;
        created += 1;
    }
    Ok(created)
}

//! Target builder: creates the new curriculum row and its knowledge-block
//! links, recording which new link replaces which source link.

use std::collections::HashMap;

use crate::curriculum::{INITIAL_VERSION, STATUS_DRAFT};
use crate::error::CoreError;
use crate::types::DbId;

use super::store::{CopyTransaction, CurriculumSnapshot, NewCurriculumRow, NewLinkRow};
use super::CopyCurriculumCommand;

/// Source link id -> newly created link id.
#[derive(Debug, Clone, Default)]
pub struct LinkMapping {
    map: HashMap<DbId, DbId>,
}

impl LinkMapping {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, source_link_id: DbId, new_link_id: DbId) {
        self.map.insert(source_link_id, new_link_id);
    }

    /// Translate an assignment's link reference.
    ///
    /// `None` stays `None`. A reference to a link that was not part of the
    /// copied snapshot is an error; the new assignment must never point at a
    /// link of another curriculum.
    pub fn resolve(&self, source_link_id: Option<DbId>) -> Result<Option<DbId>, CoreError> {
        match source_link_id {
            None => Ok(None),
            Some(old) => self.map.get(&old).copied().map(Some).ok_or_else(|| {
                CoreError::Internal(format!(
                    "subject assignment references knowledge block link {old} \
                     which is not part of the source curriculum"
                ))
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Result of the builder step, consumed by the remapper.
#[derive(Debug, Clone)]
pub struct BuiltTarget {
    pub curriculum_id: DbId,
    pub links: LinkMapping,
}

/// The curriculum row a copy inserts.
///
/// Scalar program data is carried over from the source. The major is
/// inherited. A copy always starts as an unapproved `Draft` at version
/// `1.0`.
pub fn target_row(snapshot: &CurriculumSnapshot, command: &CopyCurriculumCommand) -> NewCurriculumRow {
    let source = &snapshot.curriculum;
    NewCurriculumRow {
        code: command.new_code.clone(),
        name: command.new_name.clone(),
        major_id: source.major_id,
        description: source.description.clone(),
        version: INITIAL_VERSION.to_string(),
        academic_year: command.new_academic_year.clone(),
        total_credits: source.total_credits,
        duration: source.duration,
        level: source.level.clone(),
        status: STATUS_DRAFT.to_string(),
    }
}

/// Insert the new curriculum and one link per source link, in snapshot order.
pub async fn build_target<T: CopyTransaction>(
    tx: &mut T,
    snapshot: &CurriculumSnapshot,
    command: &CopyCurriculumCommand,
) -> Result<BuiltTarget, CoreError> {
    let curriculum_id = tx.insert_curriculum(&target_row(snapshot, command)).await?;

    let mut links = LinkMapping::with_capacity(snapshot.links.len());
    for link in &snapshot.links {
        let new_id = tx
            .insert_link(&NewLinkRow {
                curriculum_id,
                knowledge_block_id: link.knowledge_block_id,
                required_credits: link.required_credits,
                order: link.order,
            })
            .await?;
        links.insert(link.id, new_id);
    }

    Ok(BuiltTarget {
        curriculum_id,
        links,
    })
}

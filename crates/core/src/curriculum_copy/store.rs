//! Store abstraction consumed by the copy workflow.
//!
//! The workflow never talks to a database directly. It receives a
//! [`CurriculumCopyStore`] for reads and opens a [`CopyTransaction`] for all
//! writes. Dropping a transaction without calling
//! [`CopyTransaction::commit`] must discard every row it created.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Snapshot (read side)
// ---------------------------------------------------------------------------

/// Scalar fields of the curriculum being copied.
#[derive(Debug, Clone)]
pub struct SourceCurriculum {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub major_id: DbId,
    pub description: Option<String>,
    pub version: String,
    pub academic_year: String,
    pub total_credits: Option<i32>,
    pub duration: Option<f64>,
    pub level: Option<String>,
    pub status: String,
}

/// A knowledge-block link of the source curriculum.
#[derive(Debug, Clone)]
pub struct SourceLink {
    pub id: DbId,
    pub knowledge_block_id: DbId,
    pub required_credits: i32,
    pub order: i32,
}

/// A subject assignment of the source curriculum.
#[derive(Debug, Clone)]
pub struct SourceAssignment {
    pub id: DbId,
    pub subject_id: DbId,
    pub subject_code: String,
    /// Owning knowledge-block link, if any.
    pub link_id: Option<DbId>,
    pub subject_type: String,
    pub credits: i32,
    pub semester: Option<i32>,
    pub prerequisite: Option<String>,
    pub co_requisite: Option<String>,
    pub order: i32,
}

/// Consistent read of a curriculum and its nested graph.
#[derive(Debug, Clone)]
pub struct CurriculumSnapshot {
    pub curriculum: SourceCurriculum,
    /// Ordered by `(order, id)`.
    pub links: Vec<SourceLink>,
    /// Ordered by `(order, id)`.
    pub assignments: Vec<SourceAssignment>,
}

impl CurriculumSnapshot {
    /// Sort links and assignments by `(order, id)`.
    ///
    /// Stores are expected to return rows in this order already; the
    /// workflow normalizes anyway so the positional link correspondence
    /// does not depend on store behaviour.
    pub fn normalize(&mut self) {
        self.links.sort_by_key(|l| (l.order, l.id));
        self.assignments.sort_by_key(|a| (a.order, a.id));
    }

    /// Assignments owned by the given knowledge-block link, in order.
    pub fn assignments_of(&self, link_id: DbId) -> impl Iterator<Item = &SourceAssignment> {
        self.assignments
            .iter()
            .filter(move |a| a.link_id == Some(link_id))
    }

    /// Assignments not placed under any knowledge-block link.
    pub fn unassigned(&self) -> impl Iterator<Item = &SourceAssignment> {
        self.assignments.iter().filter(|a| a.link_id.is_none())
    }
}

// ---------------------------------------------------------------------------
// Rows to insert (write side)
// ---------------------------------------------------------------------------

/// A new `curricula` row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCurriculumRow {
    pub code: String,
    pub name: String,
    pub major_id: DbId,
    pub description: Option<String>,
    pub version: String,
    pub academic_year: String,
    pub total_credits: Option<i32>,
    pub duration: Option<f64>,
    pub level: Option<String>,
    pub status: String,
}

/// A new `curriculum_knowledge_blocks` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLinkRow {
    pub curriculum_id: DbId,
    pub knowledge_block_id: DbId,
    pub required_credits: i32,
    pub order: i32,
}

/// A new `curriculum_subjects` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignmentRow {
    pub curriculum_id: DbId,
    pub subject_id: DbId,
    pub link_id: Option<DbId>,
    pub subject_type: String,
    pub credits: i32,
    pub semester: Option<i32>,
    pub prerequisite: Option<String>,
    pub co_requisite: Option<String>,
    pub order: i32,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Read access plus a transaction factory for the copy workflow.
#[async_trait]
pub trait CurriculumCopyStore: Send + Sync {
    type Tx: CopyTransaction;

    /// Load a curriculum with its links and assignments, or `None`.
    async fn load_snapshot(
        &self,
        curriculum_id: DbId,
    ) -> Result<Option<CurriculumSnapshot>, CoreError>;

    /// Whether a curriculum with `code` already exists for `major_id`.
    async fn code_exists(&self, major_id: DbId, code: &str) -> Result<bool, CoreError>;

    /// Open a write transaction.
    async fn begin(&self) -> Result<Self::Tx, CoreError>;
}

/// Write handle scoped to one copy invocation.
///
/// Inserts return the new row id. A unique violation on the curriculum
/// `(code, major_id)` pair must surface as [`CoreError::Conflict`].
#[async_trait]
pub trait CopyTransaction: Send {
    async fn insert_curriculum(&mut self, row: &NewCurriculumRow) -> Result<DbId, CoreError>;

    async fn insert_link(&mut self, row: &NewLinkRow) -> Result<DbId, CoreError>;

    async fn insert_assignment(&mut self, row: &NewAssignmentRow) -> Result<DbId, CoreError>;

    /// Make every insert of this transaction visible.
    async fn commit(self) -> Result<(), CoreError>;
}

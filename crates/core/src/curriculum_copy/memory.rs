//! In-memory store for exercising the copy workflow without a database.
//!
//! Transactions buffer their rows and apply them on commit. Ids come from a
//! shared counter, like a database sequence, so rolled-back ids are skipped.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

use super::store::{
    CopyTransaction, CurriculumCopyStore, CurriculumSnapshot, NewAssignmentRow, NewCurriculumRow,
    NewLinkRow, SourceAssignment, SourceCurriculum, SourceLink,
};

#[derive(Debug, Default)]
struct Tables {
    next_id: DbId,
    curricula: Vec<(DbId, NewCurriculumRow)>,
    links: Vec<(DbId, NewLinkRow)>,
    assignments: Vec<(DbId, NewAssignmentRow)>,
}

impl Tables {
    fn allocate(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    /// Fail the n-th (0-based) assignment insert of every transaction.
    pub fail_assignment_at: Option<usize>,
    /// Report every code as free, forcing the insert to detect duplicates.
    pub skip_code_precheck: bool,
}

impl MemoryStore {
    pub fn seed_curriculum(&self, row: NewCurriculumRow) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.allocate();
        t.curricula.push((id, row));
        id
    }

    pub fn seed_link(&self, row: NewLinkRow) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.allocate();
        t.links.push((id, row));
        id
    }

    pub fn seed_assignment(&self, row: NewAssignmentRow) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.allocate();
        t.assignments.push((id, row));
        id
    }

    pub fn curriculum_count(&self) -> usize {
        self.tables.lock().unwrap().curricula.len()
    }

    pub fn link_count(&self) -> usize {
        self.tables.lock().unwrap().links.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.tables.lock().unwrap().assignments.len()
    }

    fn snapshot_of(tables: &Tables, curriculum_id: DbId) -> Option<CurriculumSnapshot> {
        let (id, row) = tables.curricula.iter().find(|(id, _)| *id == curriculum_id)?;
        let curriculum = SourceCurriculum {
            id: *id,
            code: row.code.clone(),
            name: row.name.clone(),
            major_id: row.major_id,
            description: row.description.clone(),
            version: row.version.clone(),
            academic_year: row.academic_year.clone(),
            total_credits: row.total_credits,
            duration: row.duration,
            level: row.level.clone(),
            status: row.status.clone(),
        };
        let links = tables
            .links
            .iter()
            .filter(|(_, l)| l.curriculum_id == curriculum_id)
            .map(|(id, l)| SourceLink {
                id: *id,
                knowledge_block_id: l.knowledge_block_id,
                required_credits: l.required_credits,
                order: l.order,
            })
            .collect();
        let assignments = tables
            .assignments
            .iter()
            .filter(|(_, a)| a.curriculum_id == curriculum_id)
            .map(|(id, a)| SourceAssignment {
                id: *id,
                subject_id: a.subject_id,
                subject_code: format!("SUBJ{}", a.subject_id),
                link_id: a.link_id,
                subject_type: a.subject_type.clone(),
                credits: a.credits,
                semester: a.semester,
                prerequisite: a.prerequisite.clone(),
                co_requisite: a.co_requisite.clone(),
                order: a.order,
            })
            .collect();
        let mut snapshot = CurriculumSnapshot {
            curriculum,
            links,
            assignments,
        };
        snapshot.normalize();
        Some(snapshot)
    }

    pub fn snapshot(&self, curriculum_id: DbId) -> Option<CurriculumSnapshot> {
        Self::snapshot_of(&self.tables.lock().unwrap(), curriculum_id)
    }
}

#[async_trait]
impl CurriculumCopyStore for MemoryStore {
    type Tx = MemoryTx;

    async fn load_snapshot(
        &self,
        curriculum_id: DbId,
    ) -> Result<Option<CurriculumSnapshot>, CoreError> {
        Ok(self.snapshot(curriculum_id))
    }

    async fn code_exists(&self, major_id: DbId, code: &str) -> Result<bool, CoreError> {
        if self.skip_code_precheck {
            return Ok(false);
        }
        let t = self.tables.lock().unwrap();
        Ok(t
            .curricula
            .iter()
            .any(|(_, c)| c.major_id == major_id && c.code == code))
    }

    async fn begin(&self) -> Result<Self::Tx, CoreError> {
        Ok(MemoryTx {
            tables: Arc::clone(&self.tables),
            fail_assignment_at: self.fail_assignment_at,
            curricula: Vec::new(),
            links: Vec::new(),
            assignments: Vec::new(),
        })
    }
}

pub struct MemoryTx {
    tables: Arc<Mutex<Tables>>,
    fail_assignment_at: Option<usize>,
    curricula: Vec<(DbId, NewCurriculumRow)>,
    links: Vec<(DbId, NewLinkRow)>,
    assignments: Vec<(DbId, NewAssignmentRow)>,
}

#[async_trait]
impl CopyTransaction for MemoryTx {
    async fn insert_curriculum(&mut self, row: &NewCurriculumRow) -> Result<DbId, CoreError> {
        let mut t = self.tables.lock().unwrap();
        let duplicate = t
            .curricula
            .iter()
            .chain(self.curricula.iter())
            .any(|(_, c)| c.major_id == row.major_id && c.code == row.code);
        if duplicate {
            return Err(CoreError::Conflict(
                "Duplicate value violates unique constraint: uq_curricula_major_code".to_string(),
            ));
        }
        let id = t.allocate();
        self.curricula.push((id, row.clone()));
        Ok(id)
    }

    async fn insert_link(&mut self, row: &NewLinkRow) -> Result<DbId, CoreError> {
        let id = self.tables.lock().unwrap().allocate();
        self.links.push((id, row.clone()));
        Ok(id)
    }

    async fn insert_assignment(&mut self, row: &NewAssignmentRow) -> Result<DbId, CoreError> {
        if self.fail_assignment_at == Some(self.assignments.len()) {
            return Err(CoreError::Internal("injected assignment failure".to_string()));
        }
        let id = self.tables.lock().unwrap().allocate();
        self.assignments.push((id, row.clone()));
        Ok(id)
    }

    async fn commit(self) -> Result<(), CoreError> {
        let mut t = self.tables.lock().unwrap();
        t.curricula.extend(self.curricula);
        t.links.extend(self.links);
        t.assignments.extend(self.assignments);
        Ok(())
    }
}

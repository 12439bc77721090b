//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Queries that assemble a
//! nested view take a `&mut PgConnection` so they can run inside one
//! snapshot transaction.

pub mod course_repo;
pub mod curriculum_knowledge_block_repo;
pub mod curriculum_repo;
pub mod curriculum_subject_repo;
pub mod faculty_repo;
pub mod knowledge_block_repo;
pub mod lecturer_repo;
pub mod major_repo;
pub mod school_repo;
pub mod subject_repo;
pub mod university_repo;

pub use course_repo::CourseRepo;
pub use curriculum_knowledge_block_repo::CurriculumKnowledgeBlockRepo;
pub use curriculum_repo::CurriculumRepo;
pub use curriculum_subject_repo::CurriculumSubjectRepo;
pub use faculty_repo::FacultyRepo;
pub use knowledge_block_repo::KnowledgeBlockRepo;
pub use lecturer_repo::LecturerRepo;
pub use major_repo::MajorRepo;
pub use school_repo::SchoolRepo;
pub use subject_repo::SubjectRepo;
pub use university_repo::UniversityRepo;

use sqlx::{PgPool, Postgres, Transaction};

/// Begin a read-only transaction that sees one consistent snapshot.
///
/// Used when a view is assembled from several queries.
pub async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

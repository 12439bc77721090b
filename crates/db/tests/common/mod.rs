//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use curricula_db::models::curriculum::CreateCurriculum;
use curricula_db::models::curriculum_knowledge_block::CreateCurriculumKnowledgeBlock;
use curricula_db::models::curriculum_subject::CreateCurriculumSubject;
use curricula_db::models::faculty::CreateFaculty;
use curricula_db::models::knowledge_block::CreateKnowledgeBlock;
use curricula_db::models::major::CreateMajor;
use curricula_db::models::school::CreateSchool;
use curricula_db::models::subject::CreateSubject;
use curricula_db::models::university::CreateUniversity;
use curricula_db::repositories::{
    CurriculumKnowledgeBlockRepo, CurriculumRepo, CurriculumSubjectRepo, FacultyRepo,
    KnowledgeBlockRepo, MajorRepo, SchoolRepo, SubjectRepo, UniversityRepo,
};
use sqlx::PgPool;

/// Create university -> school -> faculty and return the faculty id.
pub async fn seed_faculty(pool: &PgPool) -> i64 {
    let university = UniversityRepo::create(
        pool,
        &CreateUniversity {
            name: "State University".to_string(),
            code: "SU".to_string(),
            address: None,
            website: None,
            description: None,
        },
    )
    .await
    .unwrap();
    let school = SchoolRepo::create(
        pool,
        &CreateSchool {
            university_id: university.id,
            name: "School of Engineering".to_string(),
            code: "ENG".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    FacultyRepo::create(
        pool,
        &CreateFaculty {
            school_id: school.id,
            name: "Computer Science".to_string(),
            code: "CS".to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_major(pool: &PgPool, faculty_id: i64, code: &str) -> i64 {
    MajorRepo::create(
        pool,
        &CreateMajor {
            faculty_id,
            name: format!("Major {code}"),
            code: code.to_string(),
            degree_level: Some("Bachelor".to_string()),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_subject(pool: &PgPool, faculty_id: i64, code: &str, credits: i32) -> i64 {
    SubjectRepo::create(
        pool,
        &CreateSubject {
            faculty_id: Some(faculty_id),
            name: format!("Subject {code}"),
            code: code.to_string(),
            credits,
            theory_hours: None,
            practice_hours: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_block(pool: &PgPool, code: &str) -> i64 {
    KnowledgeBlockRepo::create(
        pool,
        &CreateKnowledgeBlock {
            name: format!("Block {code}"),
            code: code.to_string(),
            description: None,
            min_credits: None,
            max_credits: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub fn new_curriculum(major_id: i64, code: &str) -> CreateCurriculum {
    CreateCurriculum {
        major_id,
        code: code.to_string(),
        name: format!("Curriculum {code}"),
        description: Some("Four-year program".to_string()),
        version: None,
        academic_year: "2024-2025".to_string(),
        total_credits: Some(120),
        duration: Some(4.0),
        level: Some("Undergraduate".to_string()),
    }
}

pub async fn link_block(
    pool: &PgPool,
    curriculum_id: i64,
    knowledge_block_id: i64,
    required_credits: i32,
    order: i32,
) -> i64 {
    CurriculumKnowledgeBlockRepo::create(
        pool,
        curriculum_id,
        &CreateCurriculumKnowledgeBlock {
            knowledge_block_id,
            required_credits: Some(required_credits),
            sort_order: Some(order),
        },
    )
    .await
    .unwrap()
    .id
}

pub fn new_assignment(subject_id: i64, link_id: Option<i64>) -> CreateCurriculumSubject {
    CreateCurriculumSubject {
        subject_id,
        curriculum_knowledge_block_id: link_id,
        subject_type: None,
        credits: None,
        semester: None,
        prerequisite: None,
        co_requisite: None,
        sort_order: None,
    }
}

pub async fn assign_subject(
    pool: &PgPool,
    curriculum_id: i64,
    subject_id: i64,
    link_id: Option<i64>,
) -> i64 {
    CurriculumSubjectRepo::create(
        pool,
        curriculum_id,
        "Required",
        &new_assignment(subject_id, link_id),
    )
    .await
    .unwrap()
    .id
}

/// The CS2024 scenario: two linked blocks with two and one subjects, plus
/// one unassigned elective. Returns `(major_id, curriculum_id)`.
pub async fn seed_cs2024(pool: &PgPool) -> (i64, i64) {
    let faculty_id = seed_faculty(pool).await;
    let major_id = seed_major(pool, faculty_id, "CS").await;
    let curriculum = CurriculumRepo::create(pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();

    let general = seed_block(pool, "GEN").await;
    let core = seed_block(pool, "CORE").await;
    let link_general = link_block(pool, curriculum.id, general, 30, 1).await;
    let link_core = link_block(pool, curriculum.id, core, 60, 2).await;

    let math = seed_subject(pool, faculty_id, "MATH101", 3).await;
    let physics = seed_subject(pool, faculty_id, "PHYS101", 3).await;
    let programming = seed_subject(pool, faculty_id, "CS101", 4).await;
    let art = seed_subject(pool, faculty_id, "ART100", 2).await;

    assign_subject(pool, curriculum.id, math, Some(link_general)).await;
    assign_subject(pool, curriculum.id, physics, Some(link_general)).await;
    assign_subject(pool, curriculum.id, programming, Some(link_core)).await;
    CurriculumSubjectRepo::create(
        pool,
        curriculum.id,
        "Elective",
        &new_assignment(art, None),
    )
    .await
    .unwrap();

    (major_id, curriculum.id)
}

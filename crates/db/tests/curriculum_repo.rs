//! Integration tests for curricula, their knowledge-block links, and
//! subject assignments.

mod common;

use curricula_core::curriculum::summarize_credits;
use curricula_db::models::curriculum::UpdateCurriculum;
use curricula_db::models::curriculum_knowledge_block::CreateCurriculumKnowledgeBlock;
use curricula_db::models::curriculum_subject::UpdateCurriculumSubject;
use curricula_db::repositories::{
    CurriculumKnowledgeBlockRepo, CurriculumRepo, CurriculumSubjectRepo,
};
use sqlx::PgPool;

use common::*;

// ---------------------------------------------------------------------------
// Curriculum rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_curriculum_is_draft_at_initial_version(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let major_id = seed_major(&pool, faculty_id, "CS").await;

    let curriculum = CurriculumRepo::create(&pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();
    assert_eq!(curriculum.status, "Draft");
    assert_eq!(curriculum.version, "1.0");
    assert_eq!(curriculum.duration, Some(4.0));
    assert!(curriculum.approved_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_major_and_status(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let cs = seed_major(&pool, faculty_id, "CS").await;
    let se = seed_major(&pool, faculty_id, "SE").await;
    let a = CurriculumRepo::create(&pool, &new_curriculum(cs, "A")).await.unwrap();
    CurriculumRepo::create(&pool, &new_curriculum(cs, "B")).await.unwrap();
    CurriculumRepo::create(&pool, &new_curriculum(se, "C")).await.unwrap();
    CurriculumRepo::set_status(&pool, a.id, "PendingApproval", None)
        .await
        .unwrap();

    assert_eq!(CurriculumRepo::list(&pool, Some(cs), None).await.unwrap().len(), 2);
    assert_eq!(CurriculumRepo::list(&pool, None, Some("Draft")).await.unwrap().len(), 2);
    let pending = CurriculumRepo::list(&pool, Some(cs), Some("PendingApproval"))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, a.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_does_not_touch_status(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let major_id = seed_major(&pool, faculty_id, "CS").await;
    let c = CurriculumRepo::create(&pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();

    let updated = CurriculumRepo::update(
        &pool,
        c.id,
        &UpdateCurriculum {
            version: Some("1.1".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.version, "1.1");
    assert_eq!(updated.status, "Draft");
    assert_eq!(updated.name, c.name);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approval_records_approver_and_draft_clears_it(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let major_id = seed_major(&pool, faculty_id, "CS").await;
    let c = CurriculumRepo::create(&pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();

    CurriculumRepo::set_status(&pool, c.id, "PendingApproval", None)
        .await
        .unwrap();
    let approved = CurriculumRepo::set_status(&pool, c.id, "Approved", Some("Dean"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.approved_by.as_deref(), Some("Dean"));
    assert!(approved.approved_at.is_some());

    let active = CurriculumRepo::set_status(&pool, c.id, "Active", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.approved_by.as_deref(), Some("Dean"));

    let reopened = CurriculumRepo::set_status(&pool, c.id, "Draft", None)
        .await
        .unwrap()
        .unwrap();
    assert!(reopened.approved_by.is_none());
    assert!(reopened.approved_at.is_none());
}

// ---------------------------------------------------------------------------
// Links and assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_order_defaults_to_next_position(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let major_id = seed_major(&pool, faculty_id, "CS").await;
    let c = CurriculumRepo::create(&pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();
    let block = seed_block(&pool, "GEN").await;
    link_block(&pool, c.id, block, 30, 5).await;

    let other = seed_block(&pool, "CORE").await;
    let appended = CurriculumKnowledgeBlockRepo::create(
        &pool,
        c.id,
        &CreateCurriculumKnowledgeBlock {
            knowledge_block_id: other,
            required_credits: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(appended.sort_order, 6);
    assert_eq!(appended.required_credits, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_is_scoped_to_its_curriculum(pool: PgPool) {
    let (major_id, curriculum_id) = seed_cs2024(&pool).await;
    let other = CurriculumRepo::create(&pool, &new_curriculum(major_id, "OTHER"))
        .await
        .unwrap();
    let detail = CurriculumRepo::find_detail(&pool, curriculum_id)
        .await
        .unwrap()
        .unwrap();
    let link_id = detail.knowledge_blocks[0].link.id;

    assert!(CurriculumKnowledgeBlockRepo::find(&pool, other.id, link_id)
        .await
        .unwrap()
        .is_none());
    assert!(!CurriculumKnowledgeBlockRepo::delete(&pool, other.id, link_id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_credits_default_to_subject(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let major_id = seed_major(&pool, faculty_id, "CS").await;
    let c = CurriculumRepo::create(&pool, &new_curriculum(major_id, "CS2024"))
        .await
        .unwrap();
    let subject = seed_subject(&pool, faculty_id, "CS101", 4).await;

    let id = assign_subject(&pool, c.id, subject, None).await;
    let row = CurriculumSubjectRepo::find(&pool, c.id, id).await.unwrap().unwrap();
    assert_eq!(row.credits, 4);
    assert_eq!(row.sort_order, 1);
    assert_eq!(row.subject_type, "Required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_link_update_is_tri_state(pool: PgPool) {
    let (_, curriculum_id) = seed_cs2024(&pool).await;
    let detail = CurriculumRepo::find_detail(&pool, curriculum_id)
        .await
        .unwrap()
        .unwrap();
    let core_link = detail.knowledge_blocks[1].link.id;
    let math = &detail.subjects[0].assignment;
    assert!(math.curriculum_knowledge_block_id.is_some());

    // Absent: link unchanged.
    let kept = CurriculumSubjectRepo::update(
        &pool,
        curriculum_id,
        math.id,
        &UpdateCurriculumSubject {
            semester: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(kept.curriculum_knowledge_block_id, math.curriculum_knowledge_block_id);
    assert_eq!(kept.semester, Some(2));

    // Value: moved.
    let moved = CurriculumSubjectRepo::update(
        &pool,
        curriculum_id,
        math.id,
        &UpdateCurriculumSubject {
            curriculum_knowledge_block_id: Some(Some(core_link)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.curriculum_knowledge_block_id, Some(core_link));

    // Null: detached.
    let detached = CurriculumSubjectRepo::update(
        &pool,
        curriculum_id,
        math.id,
        &UpdateCurriculumSubject {
            curriculum_knowledge_block_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(detached.curriculum_knowledge_block_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_link_unassigns_its_subjects(pool: PgPool) {
    let (_, curriculum_id) = seed_cs2024(&pool).await;
    let detail = CurriculumRepo::find_detail(&pool, curriculum_id)
        .await
        .unwrap()
        .unwrap();
    let general = &detail.knowledge_blocks[0];
    assert_eq!(general.subjects.len(), 2);

    assert!(
        CurriculumKnowledgeBlockRepo::delete(&pool, curriculum_id, general.link.id)
            .await
            .unwrap()
    );

    let after = CurriculumRepo::find_detail(&pool, curriculum_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.knowledge_blocks.len(), 1);
    assert_eq!(after.subjects.len(), 4);
    let unassigned = after
        .subjects
        .iter()
        .filter(|s| s.assignment.curriculum_knowledge_block_id.is_none())
        .count();
    assert_eq!(unassigned, 3);
}

// ---------------------------------------------------------------------------
// Detail and credit summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_nests_subjects_under_links(pool: PgPool) {
    let (major_id, curriculum_id) = seed_cs2024(&pool).await;
    let detail = CurriculumRepo::find_detail(&pool, curriculum_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.major.id, major_id);
    assert_eq!(detail.knowledge_blocks.len(), 2);
    assert_eq!(detail.knowledge_blocks[0].knowledge_block.code, "GEN");
    assert_eq!(detail.knowledge_blocks[0].subjects.len(), 2);
    assert_eq!(detail.knowledge_blocks[1].knowledge_block.code, "CORE");
    assert_eq!(detail.knowledge_blocks[1].subjects.len(), 1);
    assert_eq!(detail.subjects.len(), 4);
    assert_eq!(detail.subjects[3].subject.code, "ART100");
    assert_eq!(detail.subjects[3].assignment.subject_type, "Elective");

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["code"], "CS2024");
    assert_eq!(json["knowledgeBlocks"][0]["order"], 1);
    assert_eq!(json["subjects"][3]["type"], "Elective");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_of_missing_curriculum_is_none(pool: PgPool) {
    assert!(CurriculumRepo::find_detail(&pool, 424_242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credit_inputs_feed_summary(pool: PgPool) {
    let (_, curriculum_id) = seed_cs2024(&pool).await;
    let (links, assignments) = CurriculumRepo::credit_inputs(&pool, curriculum_id)
        .await
        .unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(assignments.len(), 4);

    let summary = summarize_credits(Some(120), &links, &assignments);
    assert_eq!(summary.assigned_credits, 12);
    assert_eq!(summary.unassigned_credits, 2);
    assert_eq!(summary.blocks[0].assigned_credits, 6);
    assert!(!summary.satisfied);
}

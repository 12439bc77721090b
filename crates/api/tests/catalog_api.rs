//! HTTP-level integration tests for the catalog resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, count, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_university(pool: &PgPool, code: &str) -> i64 {
    create(
        pool,
        "/api/v1/universities",
        json!({"name": format!("University {code}"), "code": code}),
    )
    .await
}

async fn seed_faculty(pool: &PgPool) -> i64 {
    let university_id = seed_university(pool, "SU").await;
    let school_id = create(
        pool,
        "/api/v1/schools",
        json!({"universityId": university_id, "name": "Engineering", "code": "ENG"}),
    )
    .await;
    create(
        pool,
        "/api/v1/faculties",
        json!({"schoolId": school_id, "name": "Computer Science", "code": "CS"}),
    )
    .await
}

// ---------------------------------------------------------------------------
// CRUD lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_university_crud_lifecycle(pool: PgPool) {
    let id = seed_university(&pool, "SU").await;
    let uri = format!("/api/v1/universities/{id}");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["code"], "SU");
    assert!(json["data"]["createdAt"].is_string());

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"website": "https://su.example.edu"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["website"], "https://su.example.edu");
    assert_eq!(json["data"]["name"], "University SU");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_rows_return_404(pool: PgPool) {
    for uri in [
        "/api/v1/universities/424242",
        "/api/v1/majors/424242",
        "/api/v1/subjects/424242",
        "/api/v1/knowledge-blocks/424242",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");

        let response = delete(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
    }

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/lecturers/424242",
        json!({"fullName": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_school_list_filters_by_university(pool: PgPool) {
    let first = seed_university(&pool, "SU").await;
    let second = seed_university(&pool, "TU").await;
    for (university_id, code) in [(first, "ENG"), (first, "SCI"), (second, "ENG")] {
        create(
            &pool,
            "/api/v1/schools",
            json!({"universityId": university_id, "name": format!("School {code}"), "code": code}),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/schools?universityId={first}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/schools").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_list_filters_by_lecturer(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let subject_id = create(
        &pool,
        "/api/v1/subjects",
        json!({"facultyId": faculty_id, "name": "Algorithms", "code": "CS201", "credits": 4}),
    )
    .await;
    let lecturer_id = create(
        &pool,
        "/api/v1/lecturers",
        json!({
            "facultyId": faculty_id,
            "fullName": "Ada Lovelace",
            "code": "L001",
            "email": "ada@example.edu"
        }),
    )
    .await;
    create(
        &pool,
        "/api/v1/courses",
        json!({
            "subjectId": subject_id,
            "lecturerId": lecturer_id,
            "code": "CS201-01",
            "semester": 1,
            "academicYear": "2024-2025"
        }),
    )
    .await;
    create(
        &pool,
        "/api/v1/courses",
        json!({
            "subjectId": subject_id,
            "code": "CS201-02",
            "semester": 2,
            "academicYear": "2024-2025"
        }),
    )
    .await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses?lecturerId={lecturer_id}"),
    )
    .await;
    let json = body_json(response).await;
    let courses = json["data"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["code"], "CS201-01");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses?subjectId={subject_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Validation and constraint mapping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_code_format_returns_validation_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/universities",
        json!({"name": "State University", "code": "S U"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(count(&pool, "universities").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_email_returns_validation_error(pool: PgPool) {
    let faculty_id = seed_faculty(&pool).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/lecturers",
        json!({
            "facultyId": faculty_id,
            "fullName": "Ada Lovelace",
            "code": "L001",
            "email": "not-an-email"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_code_returns_conflict(pool: PgPool) {
    seed_university(&pool, "SU").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/universities",
        json!({"name": "Another", "code": "SU"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("uq_universities_code"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_parent_returns_invalid_reference(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/schools",
        json!({"universityId": 999_999, "name": "Orphan", "code": "ORP"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_knowledge_block_credit_range(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/knowledge-blocks",
        json!({"name": "Core", "code": "CORE", "minCredits": 40, "maxCredits": 20}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let id = create(
        &pool,
        "/api/v1/knowledge-blocks",
        json!({"name": "Core", "code": "CORE", "minCredits": 20, "maxCredits": 40}),
    )
    .await;

    // Checked against the stored minimum.
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/knowledge-blocks/{id}"),
        json!({"maxCredits": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/knowledge-blocks/{id}"),
        json!({"maxCredits": 60}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["maxCredits"], 60);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_linked_knowledge_block_is_refused(pool: PgPool) {
    let seeded = common::seed_cs2024(&pool).await;
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/curricula/{}", seeded.curriculum_id),
    )
    .await;
    let block_id = body_json(response).await["data"]["knowledgeBlocks"][0]["knowledgeBlockId"]
        .as_i64()
        .unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/knowledge-blocks/{block_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
    assert_eq!(count(&pool, "knowledge_blocks").await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_university_cascades_to_curricula(pool: PgPool) {
    common::seed_cs2024(&pool).await;
    let response = get(common::build_test_app(pool.clone()), "/api/v1/universities").await;
    let university_id = body_json(response).await["data"][0]["id"].as_i64().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universities/{university_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(count(&pool, "curricula").await, 0);
    assert_eq!(count(&pool, "curriculum_subjects").await, 0);
    // Subjects only lose their faculty.
    assert_eq!(count(&pool, "subjects").await, 3);
}

//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`,
//! without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use curricula_api::config::ServerConfig;
use curricula_api::router::build_app_router;
use curricula_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// POST a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `body` to `uri`, assert 201 and return the created row's id.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, 201, "POST {uri} failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}

/// Count rows of `table`.
pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

/// Handles to the rows created by [`seed_cs2024`].
pub struct Cs2024 {
    pub faculty_id: i64,
    pub major_id: i64,
    pub curriculum_id: i64,
    pub general_link: i64,
    pub core_link: i64,
}

/// Build the CS2024 scenario over the API: two linked knowledge blocks,
/// two subjects under the first, one under the second.
pub async fn seed_cs2024(pool: &PgPool) -> Cs2024 {
    let university_id = create(
        pool,
        "/api/v1/universities",
        serde_json::json!({"name": "State University", "code": "SU"}),
    )
    .await;
    let school_id = create(
        pool,
        "/api/v1/schools",
        serde_json::json!({"universityId": university_id, "name": "Engineering", "code": "ENG"}),
    )
    .await;
    let faculty_id = create(
        pool,
        "/api/v1/faculties",
        serde_json::json!({"schoolId": school_id, "name": "Computer Science", "code": "CS"}),
    )
    .await;
    let major_id = create(
        pool,
        "/api/v1/majors",
        serde_json::json!({"facultyId": faculty_id, "name": "Computer Science", "code": "CS"}),
    )
    .await;
    let curriculum_id = create(
        pool,
        "/api/v1/curricula",
        serde_json::json!({
            "majorId": major_id,
            "code": "CS2024",
            "name": "Computer Science 2024",
            "academicYear": "2024-2025",
            "totalCredits": 120,
            "duration": 4.0,
            "level": "Undergraduate"
        }),
    )
    .await;

    let general = create(
        pool,
        "/api/v1/knowledge-blocks",
        serde_json::json!({"name": "General Education", "code": "GEN"}),
    )
    .await;
    let core = create(
        pool,
        "/api/v1/knowledge-blocks",
        serde_json::json!({"name": "Core", "code": "CORE"}),
    )
    .await;
    let links_uri = format!("/api/v1/curricula/{curriculum_id}/knowledge-blocks");
    let general_link = create(
        pool,
        &links_uri,
        serde_json::json!({"knowledgeBlockId": general, "requiredCredits": 30, "order": 1}),
    )
    .await;
    let core_link = create(
        pool,
        &links_uri,
        serde_json::json!({"knowledgeBlockId": core, "requiredCredits": 60, "order": 2}),
    )
    .await;

    let subjects_uri = format!("/api/v1/curricula/{curriculum_id}/subjects");
    for (code, credits, link) in [
        ("MATH101", 3, general_link),
        ("PHYS101", 3, general_link),
        ("CS101", 4, core_link),
    ] {
        let subject_id = create(
            pool,
            "/api/v1/subjects",
            serde_json::json!({
                "facultyId": faculty_id,
                "name": format!("Subject {code}"),
                "code": code,
                "credits": credits
            }),
        )
        .await;
        create(
            pool,
            &subjects_uri,
            serde_json::json!({"subjectId": subject_id, "curriculumKnowledgeBlockId": link}),
        )
        .await;
    }

    Cs2024 {
        faculty_id,
        major_id,
        curriculum_id,
        general_link,
        core_link,
    }
}

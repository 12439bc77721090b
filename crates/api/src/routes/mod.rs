pub mod course;
pub mod curriculum;
pub mod faculty;
pub mod health;
pub mod knowledge_block;
pub mod lecturer;
pub mod major;
pub mod school;
pub mod subject;
pub mod university;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /universities                                     CRUD
/// /schools                                          CRUD, ?universityId=
/// /faculties                                        CRUD, ?schoolId=
/// /majors                                           CRUD, ?facultyId=
/// /subjects                                         CRUD, ?facultyId=
/// /lecturers                                        CRUD, ?facultyId=
/// /courses                                          CRUD, ?subjectId=&lecturerId=
/// /knowledge-blocks                                 CRUD
///
/// /curricula                                        CRUD, ?majorId=&status=
/// /curricula/{id}/status                            status transition (POST)
/// /curricula/{id}/summary                           credit summary
/// /curricula/{id}/copy                              copy as new Draft (POST)
/// /curricula/{id}/knowledge-blocks[/{link_id}]      linked knowledge blocks
/// /curricula/{id}/subjects[/{assignment_id}]        subject assignments
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/universities", university::router())
        .nest("/schools", school::router())
        .nest("/faculties", faculty::router())
        .nest("/majors", major::router())
        .nest("/subjects", subject::router())
        .nest("/lecturers", lecturer::router())
        .nest("/courses", course::router())
        .nest("/knowledge-blocks", knowledge_block::router())
        .nest("/curricula", curriculum::router())
}

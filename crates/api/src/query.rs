//! Query parameter types for list endpoints.
//!
//! Filters use camelCase keys (`?facultyId=3`) and are all optional.

use curricula_core::types::DbId;
use serde::Deserialize;

/// `?universityId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolListParams {
    pub university_id: Option<DbId>,
}

/// `?schoolId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyListParams {
    pub school_id: Option<DbId>,
}

/// `?facultyId=`, shared by majors, subjects and lecturers.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyScopedParams {
    pub faculty_id: Option<DbId>,
}

/// `?subjectId=&lecturerId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListParams {
    pub subject_id: Option<DbId>,
    pub lecturer_id: Option<DbId>,
}

/// `?majorId=&status=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumListParams {
    pub major_id: Option<DbId>,
    pub status: Option<String>,
}

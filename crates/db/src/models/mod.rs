//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON uses camelCase field names.

pub mod course;
pub mod curriculum;
pub mod curriculum_knowledge_block;
pub mod curriculum_subject;
pub mod faculty;
pub mod knowledge_block;
pub mod lecturer;
pub mod major;
pub mod school;
pub mod subject;
pub mod university;

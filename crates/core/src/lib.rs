//! Domain types, validation rules, and the curriculum copy workflow.
//!
//! This crate has no database dependency. Persistence is reached through the
//! store traits in [`curriculum_copy::store`], implemented by `curricula-db`.

pub mod catalog;
pub mod curriculum;
pub mod curriculum_copy;
pub mod error;
pub mod types;

pub mod course;
pub mod curriculum;
pub mod curriculum_copy;
pub mod curriculum_knowledge_block;
pub mod curriculum_subject;
pub mod faculty;
pub mod knowledge_block;
pub mod lecturer;
pub mod major;
pub mod school;
pub mod subject;
pub mod university;

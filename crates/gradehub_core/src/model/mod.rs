//! Domain model for the student/section/result collections.
//!
//! # Responsibility
//! - Define the canonical records owned by the entity store.
//! - Keep cross-references as plain ids, never direct references.
//!
//! # Invariants
//! - Every entity carries a stable id, immutable after creation.
//! - `Student.section_id` and `ExamResult.student_id` are id-valued links;
//!   integrity across collections is the store's job, not the model's.

pub mod exam_result;
pub mod section;
pub mod student;

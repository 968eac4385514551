//! Exam result domain model.
//!
//! # Invariants
//! - `student_id` is a required link; the store removes the result when
//!   the referenced student is deleted.
//! - `marks` lives in [0, 100]; the range is a boundary invariant and is
//!   not re-validated on read.

use crate::model::student::StudentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an exam result record.
pub type ResultId = Uuid;

/// One exam result for a student in a subject.
///
/// `subject` is freeform text, not a foreign key; results in the same
/// subject just share a matching string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    /// Stable id for this result row.
    pub id: ResultId,
    /// Student this result belongs to.
    pub student_id: StudentId,
    /// Subject name, freeform.
    pub subject: String,
    /// Score in [0, 100], enforced by the input boundary.
    pub marks: i64,
    /// `YYYY-MM-DD` date string, no semantic validation beyond format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,
}

/// Exam result payload without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFields {
    pub student_id: StudentId,
    pub subject: String,
    pub marks: i64,
    pub exam_date: Option<String>,
}

impl ExamResult {
    /// Assembles a full record from an id and a fields payload.
    pub fn from_fields(id: ResultId, fields: ResultFields) -> Self {
        Self {
            id,
            student_id: fields.student_id,
            subject: fields.subject,
            marks: fields.marks,
            exam_date: fields.exam_date,
        }
    }
}

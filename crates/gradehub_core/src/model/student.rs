//! Student domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another student.
//! - `section_id` is absent for unassigned students; the store clears it
//!   when the referenced section is deleted.

use crate::model::section::SectionId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a student record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = Uuid;

/// One enrolled student.
///
/// Serialized field names use camelCase to match the external schema
/// (`sectionId`, `enrollmentDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Stable id used for result links and section membership.
    pub id: StudentId,
    /// Display name. Non-empty; enforced by the input boundary.
    pub name: String,
    /// Contact email. Shape-checked at the boundary, not unique.
    pub email: String,
    /// Section membership; `None` means unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
    /// `YYYY-MM-DD` date string, no semantic validation beyond format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
}

/// Student payload without an id ("E minus id").
///
/// Carries create/update data; the store assigns or preserves the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub section_id: Option<SectionId>,
    pub enrollment_date: Option<String>,
}

impl Student {
    /// Assembles a full record from an id and a fields payload.
    pub fn from_fields(id: StudentId, fields: StudentFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            section_id: fields.section_id,
            enrollment_date: fields.enrollment_date,
        }
    }
}

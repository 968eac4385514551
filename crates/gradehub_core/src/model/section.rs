//! Section domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a section record.
pub type SectionId = Uuid;

/// One class section students can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Stable id referenced by `Student.section_id`.
    pub id: SectionId,
    /// Display name. Non-empty; enforced by the input boundary.
    pub name: String,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Section payload without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFields {
    pub name: String,
    pub description: Option<String>,
}

impl Section {
    /// Assembles a full record from an id and a fields payload.
    pub fn from_fields(id: SectionId, fields: SectionFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }
}

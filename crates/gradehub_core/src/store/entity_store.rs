//! In-memory entity store with referential-integrity rules.
//!
//! # Responsibility
//! - Exclusively own the student/section/result collections.
//! - Provide uniform create/update/delete plus snapshot reads.
//! - Apply per-entity integrity rules when an entity is deleted.
//!
//! # Invariants
//! - Collections preserve insertion order; update keeps position.
//! - `NotFound` is returned without mutating any collection.
//! - After a section delete no student references it; after a student
//!   delete no result references the student.
//! - The store performs no field validation; well-formed payloads are the
//!   input boundary's contract.

use crate::model::exam_result::{ExamResult, ResultFields, ResultId};
use crate::model::section::{Section, SectionFields, SectionId};
use crate::model::student::{Student, StudentFields, StudentId};
use crate::store::id_source::{IdSource, UuidIds};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Which collection an id failed to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Section,
    Result,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Student => "student",
            Self::Section => "section",
            Self::Result => "result",
        };
        write!(f, "{label}")
    }
}

/// Store-level error for mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Update/delete target id does not exist in the named collection.
    NotFound { kind: EntityKind, id: Uuid },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Equality filters for listing results.
///
/// `None` fields match everything, mirroring the "all / by student /
/// by subject" narrowing the results view offers.
#[derive(Debug, Clone, Default)]
pub struct ResultQuery {
    pub student_id: Option<StudentId>,
    pub subject: Option<String>,
}

/// In-memory owner of the three entity collections.
///
/// Mutations take `&mut self`, so single-writer discipline comes from the
/// borrow checker; embedding with concurrent writers requires an external
/// mutual-exclusion wrapper around each call.
#[derive(Debug, Clone)]
pub struct EntityStore<G: IdSource = UuidIds> {
    students: Vec<Student>,
    sections: Vec<Section>,
    results: Vec<ExamResult>,
    ids: G,
}

impl EntityStore<UuidIds> {
    /// Creates an empty store with random v4 ids.
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }
}

impl Default for EntityStore<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdSource> EntityStore<G> {
    /// Creates an empty store using the provided id source.
    pub fn with_ids(ids: G) -> Self {
        Self {
            students: Vec::new(),
            sections: Vec::new(),
            results: Vec::new(),
            ids,
        }
    }

    // Snapshot accessors, insertion order.

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn results(&self) -> &[ExamResult] {
        &self.results
    }

    pub fn get_student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn get_section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn get_result(&self, id: ResultId) -> Option<&ExamResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Lists results matching the query filters, insertion order.
    ///
    /// Returns owned clones: the sequence is a snapshot, not a live view.
    pub fn list_results(&self, query: &ResultQuery) -> Vec<ExamResult> {
        self.results
            .iter()
            .filter(|r| query.student_id.is_none_or(|id| r.student_id == id))
            .filter(|r| {
                query
                    .subject
                    .as_deref()
                    .is_none_or(|subject| r.subject == subject)
            })
            .cloned()
            .collect()
    }

    /// Distinct subject names in first-seen order, for filter dropdowns.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for result in &self.results {
            if !subjects.contains(&result.subject) {
                subjects.push(result.subject.clone());
            }
        }
        subjects
    }

    // Student operations.

    /// Creates a student with a fresh id. Never fails.
    pub fn create_student(&mut self, fields: StudentFields) -> Student {
        let student = Student::from_fields(self.ids.next_id(), fields);
        debug!("event=student_created module=store id={}", student.id);
        self.students.push(student.clone());
        student
    }

    /// Replaces the student with `id`, keeping id and position.
    pub fn update_student(&mut self, id: StudentId, fields: StudentFields) -> StoreResult<Student> {
        let slot = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Student,
                id,
            })?;
        *slot = Student::from_fields(id, fields);
        debug!("event=student_updated module=store id={id}");
        Ok(slot.clone())
    }

    /// Deletes the student and cascades: every result referencing it is
    /// removed as well.
    pub fn delete_student(&mut self, id: StudentId) -> StoreResult<()> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Student,
                id,
            })?;
        self.students.remove(index);
        let before = self.results.len();
        self.results.retain(|r| r.student_id != id);
        debug!(
            "event=student_deleted module=store id={id} cascaded_results={}",
            before - self.results.len()
        );
        Ok(())
    }

    // Section operations.

    /// Creates a section with a fresh id. Never fails.
    pub fn create_section(&mut self, fields: SectionFields) -> Section {
        let section = Section::from_fields(self.ids.next_id(), fields);
        debug!("event=section_created module=store id={}", section.id);
        self.sections.push(section.clone());
        section
    }

    /// Replaces the section with `id`, keeping id and position.
    pub fn update_section(&mut self, id: SectionId, fields: SectionFields) -> StoreResult<Section> {
        let slot = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Section,
                id,
            })?;
        *slot = Section::from_fields(id, fields);
        debug!("event=section_updated module=store id={id}");
        Ok(slot.clone())
    }

    /// Deletes the section and repairs references: students assigned to
    /// it become unassigned. Students themselves are never removed.
    pub fn delete_section(&mut self, id: SectionId) -> StoreResult<()> {
        let index = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Section,
                id,
            })?;
        self.sections.remove(index);
        let mut repaired = 0usize;
        for student in &mut self.students {
            if student.section_id == Some(id) {
                student.section_id = None;
                repaired += 1;
            }
        }
        debug!("event=section_deleted module=store id={id} repaired_students={repaired}");
        Ok(())
    }

    // Result operations.

    /// Creates a result with a fresh id. Never fails; the store does not
    /// cross-check that `student_id` names a live student.
    pub fn create_result(&mut self, fields: ResultFields) -> ExamResult {
        let result = ExamResult::from_fields(self.ids.next_id(), fields);
        debug!("event=result_created module=store id={}", result.id);
        self.results.push(result.clone());
        result
    }

    /// Replaces the result with `id`, keeping id and position.
    pub fn update_result(&mut self, id: ResultId, fields: ResultFields) -> StoreResult<ExamResult> {
        let slot = self
            .results
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Result,
                id,
            })?;
        *slot = ExamResult::from_fields(id, fields);
        debug!("event=result_updated module=store id={id}");
        Ok(slot.clone())
    }

    /// Deletes the result. No side effects on other collections.
    pub fn delete_result(&mut self, id: ResultId) -> StoreResult<()> {
        let index = self
            .results
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Result,
                id,
            })?;
        self.results.remove(index);
        debug!("event=result_deleted module=store id={id}");
        Ok(())
    }
}

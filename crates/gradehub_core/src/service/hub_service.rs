//! Hub use-case service.
//!
//! # Responsibility
//! - Validate raw form payloads, then delegate to the entity store.
//! - Expose read accessors and grade derivation for display.
//!
//! # Invariants
//! - A payload that fails validation never touches the store.
//! - Service APIs surface store errors unchanged in meaning.

use crate::grade::{classify, Grade};
use crate::input::{ResultInput, SectionInput, StudentInput, ValidationError};
use crate::model::exam_result::{ExamResult, ResultId};
use crate::model::section::{Section, SectionId};
use crate::model::student::{Student, StudentId};
use crate::store::entity_store::{EntityStore, ResultQuery, StoreError};
use crate::store::id_source::{IdSource, UuidIds};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for hub use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubServiceError {
    /// Input payload rejected before reaching the store.
    Validation(ValidationError),
    /// Store-level failure (missing update/delete target).
    Store(StoreError),
}

impl Display for HubServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HubServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for HubServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for HubServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Facade the presentation layer calls: validate, then mutate.
pub struct HubService<G: IdSource = UuidIds> {
    store: EntityStore<G>,
}

impl HubService<UuidIds> {
    /// Creates a service over an empty store with random v4 ids.
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }
}

impl Default for HubService<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdSource> HubService<G> {
    /// Creates a service over an empty store using the provided id source.
    pub fn with_ids(ids: G) -> Self {
        Self {
            store: EntityStore::with_ids(ids),
        }
    }

    /// Read access to the underlying store snapshot.
    pub fn store(&self) -> &EntityStore<G> {
        &self.store
    }

    pub fn students(&self) -> &[Student] {
        self.store.students()
    }

    pub fn sections(&self) -> &[Section] {
        self.store.sections()
    }

    pub fn results(&self) -> &[ExamResult] {
        self.store.results()
    }

    /// Lists results narrowed by the query filters.
    pub fn list_results(&self, query: &ResultQuery) -> Vec<ExamResult> {
        self.store.list_results(query)
    }

    /// Grade tier for a result's marks, for badge display.
    pub fn grade_of(&self, result: &ExamResult) -> Grade {
        classify(result.marks)
    }

    pub fn add_student(&mut self, input: StudentInput) -> Result<Student, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.create_student(fields))
    }

    pub fn update_student(
        &mut self,
        id: StudentId,
        input: StudentInput,
    ) -> Result<Student, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.update_student(id, fields)?)
    }

    pub fn delete_student(&mut self, id: StudentId) -> Result<(), HubServiceError> {
        Ok(self.store.delete_student(id)?)
    }

    pub fn add_section(&mut self, input: SectionInput) -> Result<Section, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.create_section(fields))
    }

    pub fn update_section(
        &mut self,
        id: SectionId,
        input: SectionInput,
    ) -> Result<Section, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.update_section(id, fields)?)
    }

    pub fn delete_section(&mut self, id: SectionId) -> Result<(), HubServiceError> {
        Ok(self.store.delete_section(id)?)
    }

    pub fn add_result(&mut self, input: ResultInput) -> Result<ExamResult, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.create_result(fields))
    }

    pub fn update_result(
        &mut self,
        id: ResultId,
        input: ResultInput,
    ) -> Result<ExamResult, HubServiceError> {
        let fields = input.validate()?;
        Ok(self.store.update_result(id, fields)?)
    }

    pub fn delete_result(&mut self, id: ResultId) -> Result<(), HubServiceError> {
        Ok(self.store.delete_result(id)?)
    }
}

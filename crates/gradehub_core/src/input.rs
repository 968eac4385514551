//! Input boundary validation.
//!
//! # Responsibility
//! - Turn raw form payloads into well-formed entity field payloads.
//! - Keep every validation rule out of the store, which assumes
//!   well-formed input.
//!
//! # Invariants
//! - Required-field checks trim before testing emptiness; accepted values
//!   pass through unmodified.
//! - A payload that validates is safe to hand to any store operation.

use crate::model::exam_result::ResultFields;
use crate::model::section::{SectionFields, SectionId};
use crate::model::student::{StudentFields, StudentId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Why a form payload was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    MissingField(&'static str),
    /// Email does not match the `local@domain.tld` shape.
    InvalidEmail(String),
    /// Date string is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Marks fall outside [0, 100].
    MarksOutOfRange(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidEmail(value) => write!(f, "invalid email format: `{value}`"),
            Self::InvalidDate(value) => write!(f, "invalid date format: `{value}`"),
            Self::MarksOutOfRange(marks) => {
                write!(f, "marks must be between 0 and 100, got {marks}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Raw student form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub section_id: Option<SectionId>,
    pub enrollment_date: Option<String>,
}

impl StudentInput {
    /// Validates into a well-formed fields payload.
    ///
    /// # Errors
    /// - `MissingField` when name or email is blank.
    /// - `InvalidEmail` when email does not match the expected shape.
    /// - `InvalidDate` when an enrollment date is present but malformed.
    pub fn validate(self) -> Result<StudentFields, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email));
        }
        let enrollment_date = validate_date(self.enrollment_date)?;
        Ok(StudentFields {
            name: self.name,
            email: self.email,
            section_id: self.section_id,
            enrollment_date,
        })
    }
}

/// Raw section form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionInput {
    pub name: String,
    pub description: Option<String>,
}

impl SectionInput {
    /// Validates into a well-formed fields payload.
    ///
    /// A blank description normalizes to absent.
    ///
    /// # Errors
    /// - `MissingField` when name is blank.
    pub fn validate(self) -> Result<SectionFields, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        let description = self
            .description
            .filter(|text| !text.trim().is_empty());
        Ok(SectionFields {
            name: self.name,
            description,
        })
    }
}

/// Raw exam result form payload.
///
/// `student_id` is optional here because the form's select control may be
/// empty; validation requires a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultInput {
    pub student_id: Option<StudentId>,
    pub subject: String,
    pub marks: i64,
    pub exam_date: Option<String>,
}

impl ResultInput {
    /// Validates into a well-formed fields payload.
    ///
    /// # Errors
    /// - `MissingField` when no student is selected or subject is blank.
    /// - `MarksOutOfRange` when marks fall outside [0, 100].
    /// - `InvalidDate` when an exam date is present but malformed.
    pub fn validate(self) -> Result<ResultFields, ValidationError> {
        let student_id = self
            .student_id
            .ok_or(ValidationError::MissingField("student"))?;
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingField("subject"));
        }
        if !(0..=100).contains(&self.marks) {
            return Err(ValidationError::MarksOutOfRange(self.marks));
        }
        let exam_date = validate_date(self.exam_date)?;
        Ok(ResultFields {
            student_id,
            subject: self.subject,
            marks: self.marks,
            exam_date,
        })
    }
}

fn validate_date(value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) if DATE_RE.is_match(&text) => Ok(Some(text)),
        Some(text) => Err(ValidationError::InvalidDate(text)),
        None => Ok(None),
    }
}

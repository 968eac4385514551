//! Core domain logic for GradeHub.
//! This crate is the single source of truth for business invariants.

pub mod grade;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use grade::{classify, Grade};
pub use input::{ResultInput, SectionInput, StudentInput, ValidationError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exam_result::{ExamResult, ResultFields, ResultId};
pub use model::section::{Section, SectionFields, SectionId};
pub use model::student::{Student, StudentFields, StudentId};
pub use service::hub_service::{HubService, HubServiceError};
pub use store::entity_store::{EntityKind, EntityStore, ResultQuery, StoreError, StoreResult};
pub use store::id_source::{IdSource, SequentialIds, UuidIds};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

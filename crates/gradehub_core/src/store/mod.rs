//! In-memory entity store and id generation.
//!
//! # Responsibility
//! - Own the three entity collections and their CRUD surface.
//! - Enforce cross-collection integrity rules on delete.
//!
//! # Invariants
//! - `NotFound` is the only error condition and never mutates state.
//! - Id generation is injected so uniqueness is a provable property of
//!   the source, not a timing assumption.

pub mod entity_store;
pub mod id_source;

//! Injectable id generation for the entity store.
//!
//! # Invariants
//! - A source never yields an id it has already issued, so the store's
//!   "unique among all ids ever issued" invariant holds per source.

use uuid::Uuid;

/// Source of fresh entity ids.
///
/// Injected into [`EntityStore`](crate::store::entity_store::EntityStore)
/// so id uniqueness is a property of the implementation rather than an
/// ambient timing assumption.
pub trait IdSource {
    /// Returns an id distinct from every id this source has issued.
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 uuid source, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic counter-derived id source for tests and demos.
///
/// Issues ids derived from a monotonically increasing counter, so runs
/// are reproducible and ordering assertions can name concrete ids.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.counter += 1;
        Uuid::from_u128(u128::from(self.counter))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSource, SequentialIds, UuidIds};

    #[test]
    fn uuid_ids_are_distinct_and_non_nil() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(!a.is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_ids_are_distinct_and_reproducible() {
        let mut first = SequentialIds::new();
        let mut second = SequentialIds::new();

        let run_a = [first.next_id(), first.next_id(), first.next_id()];
        let run_b = [second.next_id(), second.next_id(), second.next_id()];

        assert_eq!(run_a, run_b);
        assert_ne!(run_a[0], run_a[1]);
        assert_ne!(run_a[1], run_a[2]);
    }
}

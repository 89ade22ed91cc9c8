//! Subscription id allocation.
//!
//! All new ids come from one [`IdGenerator`], which remembers every id it
//! has seen or handed out. Ids are UUIDv7 strings, so they sort by creation
//! time, and a candidate is only returned once it is known not to clash.

use std::collections::HashSet;

use uuid::Uuid;

use crate::storage::SubscriptionId;

/// Hands out ids that collide with nothing already reserved.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    reserved: HashSet<SubscriptionId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a generator that already knows about `ids`.
    pub fn with_reserved<'a>(ids: impl IntoIterator<Item = &'a SubscriptionId>) -> Self {
        let mut generator = Self::new();
        for id in ids {
            generator.reserve(id.clone());
        }
        generator
    }

    /// Mark `id` as taken. Returns `false` if it was already taken.
    pub fn reserve(&mut self, id: SubscriptionId) -> bool {
        self.reserved.insert(id)
    }

    pub fn is_reserved(&self, id: &SubscriptionId) -> bool {
        self.reserved.contains(id)
    }

    /// Allocate a fresh id and reserve it.
    pub fn next_id(&mut self) -> SubscriptionId {
        loop {
            let candidate = SubscriptionId::from(Uuid::now_v7());
            if self.reserve(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_unique() {
        let mut ids = IdGenerator::new();
        let generated: HashSet<_> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 500);
    }

    #[test]
    fn test_reserved_ids_are_tracked() {
        let existing = [SubscriptionId::from(7_i64), SubscriptionId::from("abc")];
        let mut ids = IdGenerator::with_reserved(existing.iter());
        assert!(ids.is_reserved(&SubscriptionId::from(7_i64)));
        assert!(!ids.reserve(SubscriptionId::from("abc")));

        let fresh = ids.next_id();
        assert!(!existing.contains(&fresh));
        assert!(ids.is_reserved(&fresh));
    }

    #[test]
    fn test_generated_ids_are_uuid_strings() {
        let mut ids = IdGenerator::new();
        match ids.next_id() {
            SubscriptionId::Text(s) => assert!(Uuid::parse_str(&s).is_ok()),
            other => panic!("unexpected id {:?}", other),
        }
    }
}

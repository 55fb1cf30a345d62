//! Identity for domain objects that are looked up by a string key.

use core::cmp::Ordering;

/// A domain object whose identity outlives changes to its state.
///
/// Ids are string-backed and totally ordered: lookups compare a raw key
/// against them for equality (scans) or ordering (bisection). Two products
/// with the same id are the same product, whatever their stock or history.
pub trait Entity {
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug + AsRef<str>;

    fn id(&self) -> &Self::Id;

    /// True if the id spells exactly `key`.
    fn has_key(&self, key: &str) -> bool {
        self.id().as_ref() == key
    }

    /// Orders the id against a raw `key`.
    fn cmp_key(&self, key: &str) -> Ordering {
        self.id().as_ref().cmp(key)
    }

    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

//! Memoization of domain lookups, keyed by the full normalized input.
//!
//! Entries are never evicted. Two inputs that differ only in their query
//! string get separate entries.

use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{PoisonError, RwLock},
};

/// Outcome of a previous domain lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedLookup {
    Platform(String),
    NoMatch,
}

/// Store for domain lookups shared by every call on one detector.
pub trait DomainCache: Debug + Send + Sync {
    fn get(&self, input: &str) -> Option<CachedLookup>;

    /// Record a lookup. Racing writers for the same key are fine: last write wins.
    fn insert(&self, input: String, lookup: CachedLookup);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);
}

/// Unbounded in-memory cache behind a read/write lock.
#[derive(Debug, Default)]
pub struct MemoryDomainCache {
    entries: RwLock<HashMap<String, CachedLookup>>,
}

impl MemoryDomainCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock only means another thread panicked mid-insert; the map
// itself is still consistent, so keep using it.
impl DomainCache for MemoryDomainCache {
    fn get(&self, input: &str) -> Option<CachedLookup> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(input)
            .cloned()
    }

    fn insert(&self, input: String, lookup: CachedLookup) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(input, lookup);
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

use std::collections::BTreeMap;

/// Generic sorted keyed store backing the non-range named stores (cells,
/// labels, users, metadata).
///
/// Same discipline as the range store: absent keys are no-ops, not errors,
/// and query results never alias internal state mutably.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyedStore<K, T> {
    entries: BTreeMap<K, T>,
}

impl<K: Ord, T> KeyedStore<K, T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Load the entry for `key`, if present.
    pub fn load(&self, key: &K) -> Option<&T> {
        self.entries.get(key)
    }

    /// Save `value` under `key`, returning the previous entry if any.
    pub fn save(&mut self, key: K, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    /// Delete the entry for `key`. Returns whether an entry existed.
    pub fn delete(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Number of entries stored.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterate over entries in key order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

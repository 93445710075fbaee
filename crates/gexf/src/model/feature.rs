//! Short stable IDs for arbitrary caller-chosen keys.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

/// Memoizes a sequential string ID per distinct key.
///
/// The first key seen gets `"0"`, the next new key `"1"`, and so on.
/// Entries are never removed.
#[derive(Debug, Clone)]
pub struct FeatureIdCache<K> {
    ids: FxHashMap<K, String>,
}

impl<K: Eq + Hash> FeatureIdCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            ids: FxHashMap::default(),
        }
    }

    /// Returns the ID for `key`, assigning the next one on first sight.
    pub fn get_or_assign(&mut self, key: K) -> String {
        if let Some(id) = self.ids.get(&key) {
            return id.clone();
        }
        let id = self.ids.len().to_string();
        trace!(id = %id, "assigned feature id");
        self.ids.insert(key, id.clone());
        id
    }

    /// Returns the ID for `key` without assigning one.
    pub fn get<Q>(&self, key: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Eq + Hash> Default for FeatureIdCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

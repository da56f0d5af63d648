//! Ordered map type for decoded JSON objects.
//!
//! [`StructuredMap`] wraps an [`IndexMap`] so that objects passed through
//! [`crate::codec::decode`] keep their key order. Re-encoding a decoded
//! document therefore reproduces the original field order.
//!
//! ```rust
//! use glossy_atoms::{Structured, StructuredMap};
//!
//! let mut map = StructuredMap::new();
//! map.insert("basis".to_string(), Structured::from("cc-pVDZ"));
//! map.insert("charge".to_string(), Structured::from(0));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["basis", "charge"]);
//! ```

use crate::codec::Structured;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to decoded values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredMap(IndexMap<String, Structured>);

impl StructuredMap {
    #[must_use]
    pub fn new() -> Self {
        StructuredMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StructuredMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: String, value: Structured) -> Option<Structured> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Structured> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Structured> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Structured> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Structured> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Structured> {
        self.0.iter()
    }
}

impl IntoIterator for StructuredMap {
    type Item = (String, Structured);
    type IntoIter = indexmap::map::IntoIter<String, Structured>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StructuredMap {
    type Item = (&'a String, &'a Structured);
    type IntoIter = indexmap::map::Iter<'a, String, Structured>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Structured)> for StructuredMap {
    fn from_iter<T: IntoIterator<Item = (String, Structured)>>(iter: T) -> Self {
        StructuredMap(IndexMap::from_iter(iter))
    }
}

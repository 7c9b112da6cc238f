//! Mapping (text key → value) type
//!
//! Backed by `im::HashMap`: O(log n) get/insert/remove and O(1) clones that
//! share structure with the original. Key order is not significant.
//! Deep merge lives in [`crate::core::merge`].

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::core::Value;

/// Persistent key-value map with structural sharing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    inner: HashMap<String, Value>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Get the number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Whether `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert a key-value pair (returns new Mapping, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            inner: self.inner.update(key.into(), value.into()),
        }
    }

    /// Insert in place, returning the previous value at `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    /// Remove in place, returning the removed value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterate over values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// New mapping holding only the listed keys that are present
    pub fn pick<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut picked = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = self.inner.get(key) {
                picked.insert(key.to_owned(), value.clone());
            }
        }
        Self { inner: picked }
    }

    /// New mapping without the listed keys
    ///
    /// Starts from a structural clone, so untouched entries stay shared.
    pub fn omit<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut inner = self.inner.clone();
        for key in keys {
            inner.remove(key.as_ref());
        }
        Self { inner }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

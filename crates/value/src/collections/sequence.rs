//! Sequence type
//!
//! Ordered list of values backed by `im::Vector`, so clones share structure
//! and never copy the elements.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Value;

/// Persistent ordered sequence of values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    inner: Vector<Value>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Create from a Vec
    pub fn from_vec(vec: Vec<Value>) -> Self {
        Self {
            inner: Vector::from(vec),
        }
    }

    /// Get the length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Push an element (returns new Sequence, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn push(&self, value: impl Into<Value>) -> Self {
        let mut inner = self.inner.clone();
        inner.push_back(value.into());
        Self { inner }
    }

    /// Position of the first element equal to `item`
    pub fn index_of(&self, item: &Value) -> Option<usize> {
        self.inner.iter().position(|candidate| candidate == item)
    }

    /// Whether any element equals `item`
    pub fn contains(&self, item: &Value) -> bool {
        self.index_of(item).is_some()
    }

    /// Iterate over elements
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.inner.iter()
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(vec: Vec<Value>) -> Self {
        Self::from_vec(vec)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Sequence {
        Sequence::from_vec(vec![Value::from(1), Value::from(2), Value::from(2)])
    }

    #[test]
    fn test_get() {
        let seq = numbers();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(1), Some(&Value::from(2)));
        assert_eq!(seq.get(3), None);
    }

    #[test]
    fn test_index_of_returns_first_match() {
        let seq = numbers();
        assert_eq!(seq.index_of(&Value::from(2)), Some(1));
        assert_eq!(seq.index_of(&Value::from(7)), None);
    }

    #[test]
    fn test_contains() {
        let seq = Sequence::from_vec(vec![Value::from("a"), Value::Null]);
        assert!(seq.contains(&Value::from("a")));
        assert!(seq.contains(&Value::Null));
        assert!(!seq.contains(&Value::from("b")));
    }

    #[test]
    fn test_push_leaves_original() {
        let seq = numbers();
        let longer = seq.push(3);
        assert_eq!(seq.len(), 3);
        assert_eq!(longer.len(), 4);
        assert_eq!(longer.get(3), Some(&Value::from(3)));
    }
}

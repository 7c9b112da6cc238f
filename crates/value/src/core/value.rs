//! Unified Value enum
//!
//! The central type: a closed variant over mappings, sequences, text and
//! scalar leaves. Collections and text are reference-counted, so cloning a
//! `Value` never copies a subtree.

use bytes::Bytes;

use crate::collections::{Mapping, Sequence};
use crate::core::kind::{Shape, ValueKind};
use crate::scalar::Text;

/// Dynamic value whose shape is decided at run time
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null / absent sentinel
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// Binary data
    Bytes(Bytes),

    /// UTF-8 text string
    Text(Text),

    /// Ordered sequence of values
    Sequence(Sequence),

    /// Text keys to values
    Mapping(Mapping),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(Text::new(v.into()))
    }

    /// Create a bytes value
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Create an empty sequence value
    pub fn sequence_empty() -> Self {
        Self::Sequence(Sequence::new())
    }

    /// Create an empty mapping value
    pub fn mapping_empty() -> Self {
        Self::Mapping(Mapping::new())
    }

    // ==================== Classification ====================

    /// Kind of this value
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Shape of this value
    #[inline]
    pub const fn shape(&self) -> Shape {
        self.kind().shape()
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    // ==================== Accessors ====================

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view of any number
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Get value from a mapping by key
    ///
    /// Returns `None` when this is not a mapping or the key is absent.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Get value from a sequence by index
    ///
    /// Returns `None` when this is not a sequence or the index is out of bounds.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_sequence().and_then(|seq| seq.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
        assert_eq!(Value::null(), Value::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::boolean(true).as_bool(), Some(true));
        assert_eq!(Value::integer(7).as_integer(), Some(7));
        assert_eq!(Value::integer(7).as_float(), Some(7.0));
        assert_eq!(Value::float(0.5).as_integer(), None);
        assert_eq!(Value::text("hi").as_str(), Some("hi"));
        assert_eq!(
            Value::bytes(vec![1u8, 2]).as_bytes().map(|b| b.len()),
            Some(2)
        );
        assert!(Value::mapping_empty().as_mapping().is_some());
        assert!(Value::sequence_empty().as_sequence().is_some());
    }

    #[test]
    fn test_get_key_type_mismatch() {
        let val = Value::integer(42);
        assert!(val.get_key("foo").is_none());
    }

    #[test]
    fn test_get_index_type_mismatch() {
        let val = Value::text("hello");
        assert!(val.get_index(0).is_none());
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}

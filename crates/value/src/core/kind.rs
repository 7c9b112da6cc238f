//! Value kinds and shape classification.
//!
//! `ValueKind` names each `Value` variant. `Shape` is the coarser four-way
//! classification the resolver and merge engine dispatch on:
//!
//! ```rust
//! use strata_value::{Shape, Value, ValueKind};
//!
//! let v = Value::from("hello");
//! assert_eq!(v.kind(), ValueKind::Text);
//! assert_eq!(v.shape(), Shape::Text);
//! assert_eq!(Value::from(3.5).shape(), Shape::Scalar);
//! ```

use std::fmt::{self, Display, Formatter};

use crate::core::Value;

/// Represents the kind of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Bytes,
    Text,
    Sequence,
    Mapping,
}

/// Structural shape of a value, as seen by path traversal and merge
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// Text keys to values
    Mapping,
    /// Ordered values addressed by index
    Sequence,
    /// Characters addressed by offset
    Text,
    /// Opaque leaf: null, booleans, numbers, bytes
    Scalar,
}

impl ValueKind {
    /// Get the kind of a Value
    pub const fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Bytes(_) => Self::Bytes,
            Value::Text(_) => Self::Text,
            Value::Sequence(_) => Self::Sequence,
            Value::Mapping(_) => Self::Mapping,
        }
    }

    /// Shape this kind belongs to
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Mapping => Shape::Mapping,
            Self::Sequence => Shape::Sequence,
            Self::Text => Shape::Text,
            Self::Null | Self::Boolean | Self::Integer | Self::Float | Self::Bytes => Shape::Scalar,
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl Shape {
    /// Whether the resolver can descend into values of this shape
    pub const fn is_traversable(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Text => "text",
            Self::Scalar => "scalar",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

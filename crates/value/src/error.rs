//! Value error types
//!
//! A single self-contained error enum for every fallible value operation.
//! The resolver itself never surfaces these: `resolve` and `get` map every
//! miss to the caller's fallback. They are visible through
//! [`Value::lookup`](crate::Value::lookup), [`merge`](crate::merge) and the
//! limit-checked entry points.

use thiserror::Error;

/// Result type used throughout strata-value
pub type ValueResult<T> = Result<T, ValueError>;

/// Value operation errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Type mismatch between expected and actual kinds
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Mapping key not found
    #[error("Key not found: '{key}'")]
    KeyNotFound { key: String },

    /// Sequence index or text offset out of bounds
    #[error("Index {index} out of bounds (length: {length})")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Path segment could not be used as an index or offset
    #[error("Invalid path segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },

    /// Tried to descend into a value that has no children
    #[error("Cannot descend into {kind} with segment '{segment}'")]
    NotTraversable { kind: String, segment: String },

    /// Resolution started from the null sentinel
    #[error("Cannot resolve path '{path}' on null")]
    NullRoot { path: String },

    /// Configured limit exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: String,
        max: usize,
        actual: usize,
    },

    /// Conversion between representations failed
    #[error("Cannot convert from {from} to {to}")]
    Conversion { from: String, to: String },
}

impl ValueError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create an invalid segment error
    pub fn invalid_segment(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Create a not traversable error
    pub fn not_traversable(kind: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::NotTraversable {
            kind: kind.into(),
            segment: segment.into(),
        }
    }

    /// Create a null root error
    pub fn null_root(path: impl Into<String>) -> Self {
        Self::NullRoot { path: path.into() }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.into(),
            max,
            actual,
        }
    }

    /// Create a conversion error
    pub fn conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Conversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether this error describes a resolution miss
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. }
                | Self::IndexOutOfBounds { .. }
                | Self::InvalidSegment { .. }
                | Self::NotTraversable { .. }
                | Self::NullRoot { .. }
        )
    }
}

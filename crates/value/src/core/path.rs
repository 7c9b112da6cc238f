//! Dotted-path resolution for Value
//!
//! A path such as `contacts.address.geo_location.0` is split on `.` and
//! walked left to right. How a segment is read depends on the node it meets:
//!
//! | node     | segment meaning                         |
//! |----------|-----------------------------------------|
//! | mapping  | literal key                             |
//! | sequence | non-negative index                      |
//! | text     | non-negative character offset           |
//! | scalar   | nothing; traversal stops                |
//!
//! [`Value::resolve`] is total: every miss becomes the caller's fallback.
//! [`Value::lookup`] walks the same way but reports why it stopped.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::core::Value;
use crate::error::{ValueError, ValueResult};
use crate::limits::ValueLimits;

/// One dot-separated piece of a [`Path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    raw: String,
    index: Option<usize>,
}

impl PathSegment {
    /// Create a segment, pre-parsing its numeric reading
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let index = raw.parse::<usize>().ok();
        Self { raw, index }
    }

    /// The segment as a mapping key
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The segment as a sequence index or text offset, if it parses as one
    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        self.index
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parsed dotted path
///
/// Always holds at least one segment: `""` parses to a single empty segment.
///
/// ```
/// use strata_value::Path;
///
/// let path = Path::parse("items.0.name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.segments()[1].as_index(), Some(0));
/// assert_eq!(path.to_string(), "items.0.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Split `path` on `.`
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(PathSegment::new).collect(),
        }
    }

    /// Split `path` on `.`, rejecting paths with too many segments
    pub fn parse_with_limits(path: &str, limits: &ValueLimits) -> ValueResult<Self> {
        limits.check_path_segments(path.split('.').count())?;
        Ok(Self::parse(path))
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Outcome of descending one level
enum Step {
    Descended(Value),
    Fallback(ValueError),
}

fn descend(node: &Value, segment: &PathSegment) -> Step {
    match node {
        Value::Mapping(map) => match map.get(segment.as_str()) {
            Some(child) => Step::Descended(child.clone()),
            None => Step::Fallback(ValueError::key_not_found(segment.as_str())),
        },
        Value::Sequence(seq) => match segment.as_index() {
            Some(index) => match seq.get(index) {
                Some(child) => Step::Descended(child.clone()),
                None => Step::Fallback(ValueError::index_out_of_bounds(index, seq.len())),
            },
            None => Step::Fallback(ValueError::invalid_segment(
                segment.as_str(),
                "expected a sequence index",
            )),
        },
        Value::Text(text) => match segment.as_index() {
            Some(offset) => match text.char_at(offset) {
                Some(ch) => Step::Descended(Value::Text(ch)),
                None => Step::Fallback(ValueError::index_out_of_bounds(
                    offset,
                    text.char_count(),
                )),
            },
            None => Step::Fallback(ValueError::invalid_segment(
                segment.as_str(),
                "expected a character offset",
            )),
        },
        Value::Null
        | Value::Boolean(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::Bytes(_) => Step::Fallback(ValueError::not_traversable(
            node.kind().name(),
            segment.as_str(),
        )),
    }
}

impl Value {
    // ==================== Path-based Access ====================

    /// Resolve `path`, returning `fallback` when traversal cannot complete
    ///
    /// A null root short-circuits to `fallback` before the path is parsed.
    ///
    /// ```
    /// use strata_value::Value;
    ///
    /// let doc = Value::from(serde_json::json!({"a": [1, 2], "s": "hello"}));
    /// assert_eq!(doc.resolve("a.1", 0), Value::from(2));
    /// assert_eq!(doc.resolve("a.5", "X"), Value::from("X"));
    /// assert_eq!(doc.resolve("s.1", ""), Value::from("e"));
    /// ```
    pub fn resolve(&self, path: &str, fallback: impl Into<Value>) -> Value {
        if self.is_null() {
            return fallback.into();
        }
        self.resolve_path(&Path::parse(path), fallback)
    }

    /// Resolve a pre-parsed path, returning `fallback` on any miss
    pub fn resolve_path(&self, path: &Path, fallback: impl Into<Value>) -> Value {
        match self.lookup(path) {
            Ok(value) => value,
            Err(_) => fallback.into(),
        }
    }

    /// Resolve `path` with [`Value::Null`] as the fallback
    pub fn get_path(&self, path: &str) -> Value {
        self.resolve(path, Value::Null)
    }

    /// Walk `path` and report why traversal stopped, if it did
    pub fn lookup(&self, path: &Path) -> ValueResult<Value> {
        if self.is_null() {
            trace!(path = %path, "path lookup on null root");
            return Err(ValueError::null_root(path.to_string()));
        }

        let mut current = self.clone();
        for (position, segment) in path.segments().iter().enumerate() {
            match descend(&current, segment) {
                Step::Descended(next) => current = next,
                Step::Fallback(miss) => {
                    trace!(path = %path, position, reason = %miss, "path lookup missed");
                    return Err(miss);
                }
            }
        }
        Ok(current)
    }

    /// Check if `path` resolves to a value
    pub fn has_path(&self, path: &str) -> bool {
        self.lookup(&Path::parse(path)).is_ok()
    }
}

/// Resolve `path` against `root`, returning `fallback` on any miss
pub fn resolve(root: &Value, path: &str, fallback: impl Into<Value>) -> Value {
    root.resolve(path, fallback)
}

/// Resolve `path` against `root`, returning [`Value::Null`] on any miss
pub fn get(root: &Value, path: &str) -> Value {
    root.get_path(path)
}

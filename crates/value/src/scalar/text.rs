//! Text (UTF-8 string) type
//!
//! - Efficient cloning via `Arc<str>`
//! - Character addressing by zero-based offset in `char`s, not bytes

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// UTF-8 text string with efficient cloning
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new Text from a String (takes ownership)
    pub fn new(s: String) -> Self {
        Self {
            inner: Arc::from(s.into_boxed_str()),
        }
    }

    /// Get the string as &str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the byte length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the character count (O(n) operation)
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Character at `offset`, as a one-character Text
    ///
    /// Offsets count Unicode scalar values, so `"héllo"` has `'l'` at 2.
    pub fn char_at(&self, offset: usize) -> Option<Text> {
        self.inner
            .chars()
            .nth(offset)
            .map(|ch| Text::new(ch.to_string()))
    }

    /// Consume and return the inner Arc
    pub fn into_arc(self) -> Arc<str> {
        self.inner
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self { inner: Arc::from(s) }
    }
}

impl From<Arc<str>> for Text {
    fn from(inner: Arc<str>) -> Self {
        Self { inner }
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.inner.to_string()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

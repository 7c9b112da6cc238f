//! Configurable limits for path parsing, merging and JSON import
//!
//! None of the core operations need limits to terminate on well-formed
//! input. They exist for callers that handle untrusted documents or paths.

use crate::error::{ValueError, ValueResult};

/// Configurable limits for value operations
///
/// # Example
///
/// ```
/// use strata_value::ValueLimits;
///
/// let limits = ValueLimits::default();
/// assert_eq!(limits.max_path_segments, 100);
///
/// let strict = ValueLimits::strict();
/// assert!(strict.check_nesting_depth(33).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLimits {
    /// Maximum number of segments in a parsed path
    pub max_path_segments: usize,

    /// Maximum depth for nested structures
    pub max_nesting_depth: usize,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            max_path_segments: 100,
            max_nesting_depth: 100,
        }
    }
}

impl ValueLimits {
    /// Permissive limits for trusted environments
    pub fn permissive() -> Self {
        Self {
            max_path_segments: 1_000,
            max_nesting_depth: 1_000,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_path_segments: 32,
            max_nesting_depth: 32,
        }
    }

    /// No limits
    pub const fn unlimited() -> Self {
        Self {
            max_path_segments: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    /// Validate path segment count
    #[inline]
    pub fn check_path_segments(&self, count: usize) -> ValueResult<()> {
        if count > self.max_path_segments {
            tracing::debug!(count, max = self.max_path_segments, "path segment limit exceeded");
            Err(ValueError::limit_exceeded(
                "path segments",
                self.max_path_segments,
                count,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate nesting depth
    #[inline]
    pub fn check_nesting_depth(&self, depth: usize) -> ValueResult<()> {
        if depth > self.max_nesting_depth {
            tracing::debug!(depth, max = self.max_nesting_depth, "nesting depth limit exceeded");
            Err(ValueError::limit_exceeded(
                "nesting depth",
                self.max_nesting_depth,
                depth,
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValueLimits::default();
        assert!(limits.check_path_segments(100).is_ok());
        assert!(limits.check_path_segments(101).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = ValueLimits::strict();
        assert!(limits.check_nesting_depth(32).is_ok());
        assert_eq!(
            limits.check_nesting_depth(40),
            Err(ValueError::limit_exceeded("nesting depth", 32, 40))
        );
    }

    #[test]
    fn test_permissive_limits() {
        let limits = ValueLimits::permissive();
        assert!(limits.check_path_segments(500).is_ok());
    }

    #[test]
    fn test_unlimited() {
        let limits = ValueLimits::unlimited();
        assert!(limits.check_nesting_depth(usize::MAX - 1).is_ok());
        assert!(limits.check_path_segments(usize::MAX).is_ok());
    }
}

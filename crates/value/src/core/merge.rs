//! Deep merge of mapping-shaped values
//!
//! For every key of the overlay:
//! - both sides hold mappings: merge them recursively
//! - otherwise: the overlay value replaces the base value wholesale
//!
//! Keys only in the base are kept; keys only in the overlay are added.
//! The result starts as a structural clone of the base, so only the nodes
//! along overwritten keys are rebuilt and both inputs stay untouched.

use tracing::debug;

use crate::collections::Mapping;
use crate::core::Value;
use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};
use crate::limits::ValueLimits;

impl Mapping {
    /// Deep merge `overlay` into a copy of `self`
    ///
    /// ```
    /// use strata_value::{Mapping, Value};
    ///
    /// let base = Mapping::from_iter([("x", Value::from(1)), ("y", Value::from(2))]);
    /// let overlay = Mapping::from_iter([("y", Value::from(9))]);
    /// let merged = base.merge(&overlay);
    /// assert_eq!(merged.get("x"), Some(&Value::from(1)));
    /// assert_eq!(merged.get("y"), Some(&Value::from(9)));
    /// ```
    pub fn merge(&self, overlay: &Mapping) -> Mapping {
        let mut result = self.clone();
        for (key, value) in overlay.iter() {
            let merged = match (result.get(key), value) {
                (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                    Value::Mapping(existing.merge(incoming))
                }
                _ => value.clone(),
            };
            result.set(key, merged);
        }
        result
    }

    /// Deep merge with a bound on how deep matching mappings may nest
    pub fn merge_with_limits(&self, overlay: &Mapping, limits: &ValueLimits) -> ValueResult<Mapping> {
        merge_at_depth(self, overlay, 1, limits)
    }

    /// Fold mappings left to right; later mappings win
    pub fn merge_all<'a, I>(mappings: I) -> Mapping
    where
        I: IntoIterator<Item = &'a Mapping>,
    {
        mappings
            .into_iter()
            .fold(Mapping::new(), |acc, next| acc.merge(next))
    }
}

fn merge_at_depth(
    base: &Mapping,
    overlay: &Mapping,
    depth: usize,
    limits: &ValueLimits,
) -> ValueResult<Mapping> {
    limits.check_nesting_depth(depth)?;

    let mut result = base.clone();
    for (key, value) in overlay.iter() {
        let merged = match (result.get(key), value) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                Value::Mapping(merge_at_depth(existing, incoming, depth + 1, limits)?)
            }
            _ => value.clone(),
        };
        result.set(key, merged);
    }
    Ok(result)
}

/// Both top-level arguments must be mappings; anything else is rejected
fn expect_mapping<'a>(value: &'a Value, role: &'static str) -> ValueResult<&'a Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => {
            debug!(role, kind = %other.kind(), "merge rejected non-mapping input");
            Err(ValueError::type_mismatch(
                ValueKind::Mapping.name(),
                other.kind().name(),
            ))
        }
    }
}

impl Value {
    // ==================== Merge Operations ====================

    /// Deep merge two mapping values; `overlay` wins on conflicts
    ///
    /// Fails with [`ValueError::TypeMismatch`] when either side is not a
    /// mapping. `self` is checked first.
    pub fn merge(&self, overlay: &Value) -> ValueResult<Value> {
        let base = expect_mapping(self, "base")?;
        let overlay = expect_mapping(overlay, "overlay")?;
        Ok(Value::Mapping(base.merge(overlay)))
    }

    /// [`Value::merge`] with a nesting depth bound
    pub fn merge_with_limits(&self, overlay: &Value, limits: &ValueLimits) -> ValueResult<Value> {
        let base = expect_mapping(self, "base")?;
        let overlay = expect_mapping(overlay, "overlay")?;
        base.merge_with_limits(overlay, limits).map(Value::Mapping)
    }
}

/// Deep merge `overlay` into a copy of `base`
pub fn merge(base: &Value, overlay: &Value) -> ValueResult<Value> {
    base.merge(overlay)
}

/// Deep merge with a nesting depth bound
pub fn merge_with_limits(base: &Value, overlay: &Value, limits: &ValueLimits) -> ValueResult<Value> {
    base.merge_with_limits(overlay, limits)
}

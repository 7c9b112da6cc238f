//! Conversions between Value, Rust primitives and `serde_json::Value`
//!
//! JSON numbers become `Integer` when they fit in i64 and `Float` otherwise.
//! Going back, non-finite floats become `null` and bytes become a base64
//! string, since JSON has no representation for either.

use base64::Engine;
use bytes::Bytes;
use serde_json::Value as JsonValue;

use crate::collections::{Mapping, Sequence};
use crate::core::Value;
use crate::error::{ValueError, ValueResult};
use crate::limits::ValueLimits;
use crate::scalar::Text;

// ==================== Primitive conversions ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Text::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Text::new(v))
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Self::Sequence(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Sequence(Sequence::from_vec(v))
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Self::Mapping(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueError;

    fn try_from(value: Value) -> ValueResult<Self> {
        value
            .as_integer()
            .ok_or_else(|| ValueError::conversion(value.kind().name(), "i64"))
    }
}

impl TryFrom<Value> for String {
    type Error = ValueError;

    fn try_from(value: Value) -> ValueResult<Self> {
        match value {
            Value::Text(text) => Ok(text.into()),
            other => Err(ValueError::conversion(other.kind().name(), "String")),
        }
    }
}

// ==================== JSON conversions ====================

fn number_from_json(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(u) = n.as_u64() {
        // only reachable above i64::MAX
        Value::Float(u as f64)
    } else {
        n.as_f64().map_or(Value::Null, Value::Float)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        Self::from(&json)
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => number_from_json(n),
            JsonValue::String(s) => Value::from(s.as_str()),
            JsonValue::Array(items) => {
                Value::Sequence(items.iter().map(Value::from).collect())
            }
            JsonValue::Object(map) => Value::Mapping(
                map.iter()
                    .map(|(key, value)| (key.as_str(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn from_json_at_depth(json: &JsonValue, depth: usize, limits: &ValueLimits) -> ValueResult<Value> {
    match json {
        JsonValue::Array(items) => {
            limits.check_nesting_depth(depth)?;
            items
                .iter()
                .map(|item| from_json_at_depth(item, depth + 1, limits))
                .collect::<ValueResult<Sequence>>()
                .map(Value::Sequence)
        }
        JsonValue::Object(map) => {
            limits.check_nesting_depth(depth)?;
            map.iter()
                .map(|(key, value)| {
                    from_json_at_depth(value, depth + 1, limits).map(|v| (key.as_str(), v))
                })
                .collect::<ValueResult<Mapping>>()
                .map(Value::Mapping)
        }
        scalar => Ok(Value::from(scalar)),
    }
}

impl Value {
    /// Convert from JSON, rejecting documents nested deeper than the limit
    ///
    /// The outermost array or object sits at depth 1.
    pub fn from_json_with_limits(json: &JsonValue, limits: &ValueLimits) -> ValueResult<Value> {
        from_json_at_depth(json, 1, limits)
    }

    /// Convert to `serde_json::Value`
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            Value::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
            }
            Value::Bytes(b) => {
                JsonValue::String(base64::engine::general_purpose::STANDARD.encode(b))
            }
            Value::Text(t) => JsonValue::String(t.as_str().to_owned()),
            Value::Sequence(seq) => JsonValue::Array(seq.iter().map(Value::to_json).collect()),
            Value::Mapping(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, value)| (key.to_owned(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

//! Display formatting as compact JSON
//!
//! Formatting goes through [`Value::to_json`], so mapping keys come out
//! sorted and the text is stable regardless of hash order.

use std::fmt;

use crate::collections::{Mapping, Sequence};
use crate::core::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Mapping(self.clone()))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Sequence(self.clone()))
    }
}

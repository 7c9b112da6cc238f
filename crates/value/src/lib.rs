//! # Strata Value
//!
//! Dynamic, tree-shaped values with two core operations:
//!
//! - **Path resolution**: read `contacts.address.geo_location.0` out of a
//!   decoded document, getting a fallback instead of an error on any miss.
//! - **Deep merge**: combine two mapping trees, recursing into nested
//!   mappings and letting the overlay win everywhere else.
//!
//! ```rust
//! use serde_json::json;
//! use strata_value::{Value, get, merge, resolve};
//!
//! let defaults = Value::from(json!({"server": {"port": 8080, "host": "localhost"}}));
//! let overrides = Value::from(json!({"server": {"port": 9090}}));
//!
//! let config = merge(&defaults, &overrides)?;
//! assert_eq!(get(&config, "server.port"), Value::from(9090));
//! assert_eq!(get(&config, "server.host"), Value::from("localhost"));
//! assert_eq!(resolve(&config, "server.tls", false), Value::from(false));
//! # Ok::<(), strata_value::ValueError>(())
//! ```
//!
//! Values are immutable and share structure: merging never touches its
//! inputs and only rebuilds the nodes along overwritten keys.

pub mod collections;
pub mod core;
pub mod error;
pub mod limits;
pub mod scalar;

pub use crate::collections::{Mapping, Sequence};
pub use crate::core::merge::{merge, merge_with_limits};
pub use crate::core::path::{get, resolve};
pub use crate::core::{Path, PathSegment, Shape, Value, ValueKind};
pub use crate::error::{ValueError, ValueResult};
pub use crate::limits::ValueLimits;
pub use crate::scalar::Text;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Mapping, Path, Sequence, Shape, Text, Value, ValueError, ValueKind, ValueLimits,
        ValueResult, get, merge, resolve,
    };
}

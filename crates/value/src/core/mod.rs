//! Core modules
//!
//! ### [`value`] - The Value enum
//!
//! The closed [`Value`] enum: mappings, sequences, text and scalar leaves,
//! all cheap to clone.
//!
//! ### [`kind`] - Type classification
//!
//! [`ValueKind`] names each variant; [`Shape`] groups them into the four
//! shapes traversal and merge dispatch on.
//!
//! ### [`path`] - Value navigation
//!
//! Dotted paths over mapping keys, sequence indices and text offsets, with a
//! total `resolve` and a diagnostic `lookup`.
//!
//! ### [`merge`] - Deep merge
//!
//! Overlay-wins recursive merge of mapping trees.
pub mod conversions;
pub mod display;
pub mod kind;
pub mod merge;
pub mod path;
pub mod serde;
pub mod value;

pub use kind::{Shape, ValueKind};
pub use path::{Path, PathSegment};
pub use value::Value;

//! Scalar types
//!
//! Numbers, booleans and null live directly in [`Value`](crate::Value);
//! text gets its own type because the resolver addresses it by offset.

pub mod text;

pub use text::Text;

//! Collection types with persistent data structures
//!
//! - [`Sequence`]: ordered list (`im::Vector`)
//! - [`Mapping`]: key-value map (`im::HashMap`)

pub mod mapping;
pub mod sequence;

pub use mapping::Mapping;
pub use sequence::Sequence;

//! Version numbers and bump rules.

pub mod bump;
pub mod number;

pub use bump::{BumpType, apply_bump_to_version};
pub use number::Version;

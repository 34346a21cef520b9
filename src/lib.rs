//! pkgbump - A CLI tool that bumps the semantic version in a package.json manifest.
//!
//! # Overview
//!
//! pkgbump reads a JSON manifest, advances its `version` field by a patch,
//! minor or major step, and writes the manifest back with every other field
//! preserved in its original order.

pub mod bumper;
pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use bumper::{BumpConfig, BumpOutcome, bump, run_bump};
pub use error::{ErrorKind, ManifestError, VersionError};
pub use manifest::Manifest;
pub use version::{BumpType, Version};

//! verbump - bump the semantic version in a Cargo manifest.
//!
//! # Overview
//!
//! verbump reads `package.version` from a manifest, applies a major, minor,
//! or patch bump, and writes the result back without disturbing the rest of
//! the file's formatting or comments.

pub mod bumper;
pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use bumper::{BumpOutcome, bump_manifest};
pub use error::BumpError;
pub use manifest::Manifest;
pub use version::{BumpLevel, apply_bump};

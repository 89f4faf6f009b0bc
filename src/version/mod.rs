//! Version management and semver bumping.

pub mod bump;

pub use bump::{BumpLevel, apply_bump};

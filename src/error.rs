//! Error types for verbump using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, bumping, and writing a manifest version.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid bump level '{0}': expected one of major, minor, patch")]
    InvalidBumpLevel(String),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("No string `package.version` field found in {}", path.display())]
    MissingVersion { path: PathBuf },

    #[error("Failed to parse version '{0}': {1}")]
    InvalidVersion(String, #[source] semver::Error),

    #[error("Cannot bump {level} component of {version}: value would overflow")]
    VersionOverflow { version: String, level: String },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Bump the version stored in a manifest file.
//!
//! Read, parse, bump, report, then write. The manifest is only touched by the
//! final step, after everything before it has succeeded.

use std::path::{Path, PathBuf};

use semver::Version;
use tracing::debug;

use crate::error::BumpError;
use crate::manifest::Manifest;
use crate::version::{BumpLevel, apply_bump};

/// Result of a successful bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub path: PathBuf,
    pub previous: Version,
    pub next: Version,
}

/// Bump `package.version` in the manifest at `path` by `level`.
///
/// Prints `Bumping version from <old> to <new>` to stdout before writing.
/// On any error the manifest on disk is left untouched.
pub fn bump_manifest(path: &Path, level: BumpLevel) -> Result<BumpOutcome, BumpError> {
    let mut manifest = Manifest::load(path)?;

    let previous = manifest.version()?;
    debug!(version = %previous, %level, "Parsed current version");

    let next = apply_bump(&previous, level)?;

    println!("Bumping version from {} to {}", previous, next);

    manifest.set_version(&next)?;
    manifest.save()?;

    Ok(BumpOutcome {
        path: manifest.path().to_path_buf(),
        previous,
        next,
    })
}

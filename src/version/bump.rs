//! Semver bump rules for an explicit bump level.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use semver::{Prerelease, Version};

use crate::error::BumpError;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpLevel {
    type Err = BumpError;

    /// Parse a bump level. Matching is case-sensitive, same as the CLI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "patch" => Ok(BumpLevel::Patch),
            other => Err(BumpError::InvalidBumpLevel(other.to_string())),
        }
    }
}

/// Compute the next version for `level`.
///
/// - major: `X.Y.Z` -> `(X+1).0.0`
/// - minor: `X.Y.Z` -> `X.(Y+1).0`
/// - patch: `X.Y.Z` -> `X.Y.(Z+1)`
///
/// Any pre-release label is dropped. Build metadata is carried over
/// unchanged from `current`.
pub fn apply_bump(current: &Version, level: BumpLevel) -> Result<Version, BumpError> {
    let overflow = || BumpError::VersionOverflow {
        version: current.to_string(),
        level: level.to_string(),
    };

    let mut next = match level {
        BumpLevel::Major => Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpLevel::Minor => Version::new(
            current.major,
            current.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpLevel::Patch => Version::new(
            current.major,
            current.minor,
            current.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };

    next.pre = Prerelease::EMPTY;
    next.build = current.build.clone();

    Ok(next)
}

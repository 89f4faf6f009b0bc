//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A hand-maintained manifest with comments, blank lines, and a trailing
/// comment on the version line.
pub fn sample_manifest(version: &str) -> String {
    format!(
        r#"# Release manifest, edited by hand.

[package]
name = "sample"   # crate name
version = "{version}" # bumped by verbump
edition = "2024"
authors = ["Sample Author <sample@example.com>"]

[dependencies]
# pinned on purpose
semver = {{ version = "1", features = ["serde"] }}
toml_edit = "0.24"

[profile.release]
lto = true
"#
    )
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `content` as `Cargo.toml` inside `dir`, returning its path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("Cargo.toml");
    std::fs::write(&path, content).expect("Failed to write manifest");
    path
}

/// Read a file as a string.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

//! Format-preserving access to `package.version` in a Cargo manifest.
//!
//! The manifest is parsed with [`toml_edit::Document`], which keeps the span
//! of every value in the original text. A new version is spliced into that
//! text in place of the old string token, so line endings, a leading BOM,
//! comments, and quote style are all left exactly as they were.

use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use semver::Version;
use tempfile::NamedTempFile;
use toml_edit::{Document, Item};
use tracing::debug;

use crate::error::BumpError;

/// An in-memory Cargo manifest tied to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: Document<String>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, BumpError> {
        let content = std::fs::read_to_string(path).map_err(|e| BumpError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Read manifest");

        Self::parse(path, content)
    }

    /// Parse manifest `content` as if it had been read from `path`.
    pub fn parse(path: &Path, content: impl Into<String>) -> Result<Self, BumpError> {
        let doc = Document::parse(content.into()).map_err(|e| BumpError::InvalidToml {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// The path as given by the caller, before any symlink resolution.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw `package.version` string.
    ///
    /// Fails with `MissingVersion` when the field is absent or is not a
    /// string (e.g. `version.workspace = true`).
    pub fn version_str(&self) -> Result<&str, BumpError> {
        self.version_item()
            .and_then(|v| v.as_str())
            .ok_or_else(|| self.missing_version())
    }

    /// `package.version` parsed as a semantic version.
    pub fn version(&self) -> Result<Version, BumpError> {
        let raw = self.version_str()?;
        Version::parse(raw).map_err(|e| BumpError::InvalidVersion(raw.to_string(), e))
    }

    /// Replace `package.version` with `version`.
    ///
    /// Only the string token changes. Its opening and closing delimiters
    /// (`"`, `'`, or their triple-quoted forms) are reused.
    pub fn set_version(&mut self, version: &Version) -> Result<(), BumpError> {
        let span = self.version_span()?;
        let raw = self.doc.raw();
        let token = &raw[span.clone()];

        let delimiter = ["\"\"\"", "'''", "\"", "'"]
            .into_iter()
            .find(|d| token.starts_with(*d))
            .unwrap_or("\"");

        let mut content = String::with_capacity(raw.len() + 8);
        content.push_str(&raw[..span.start]);
        content.push_str(delimiter);
        content.push_str(&version.to_string());
        content.push_str(delimiter);
        content.push_str(&raw[span.end..]);

        *self = Self::parse(&self.path, content)?;

        Ok(())
    }

    /// The full manifest text.
    pub fn render(&self) -> &str {
        self.doc.raw()
    }

    /// Write the manifest back to the file it was loaded from.
    ///
    /// Symlinks are followed, so the link's target is what gets replaced.
    /// The new content goes to a temp file next to that target, which is then
    /// renamed over it, so a failed write never truncates the manifest.
    pub fn save(&self) -> Result<(), BumpError> {
        let write_failed = |e: std::io::Error| BumpError::WriteFailed {
            path: self.path.clone(),
            source: e,
        };

        let target = match std::fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(write_failed(e)),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
        tmp.write_all(self.render().as_bytes())
            .map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;

        // Temp files are created 0600; keep the manifest's original mode.
        if let Ok(meta) = std::fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_failed)?;
        }

        tmp.persist(&target).map_err(|e| write_failed(e.error))?;
        debug!(path = %self.path.display(), target = %target.display(), "Wrote manifest");

        Ok(())
    }

    fn version_item(&self) -> Option<&Item> {
        self.doc.get("package").and_then(|p| p.get("version"))
    }

    /// Byte range of the `package.version` string token in the raw text.
    fn version_span(&self) -> Result<Range<usize>, BumpError> {
        self.version_item()
            .filter(|v| v.is_str())
            .and_then(|v| v.span())
            .ok_or_else(|| self.missing_version())
    }

    fn missing_version(&self) -> BumpError {
        BumpError::MissingVersion {
            path: self.path.clone(),
        }
    }
}

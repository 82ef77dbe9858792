use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker written to the commit-id file when no commit hash is available.
const NO_SHA_MARKER: &str = "n/a";

/// Reads and writes the two files the packaging pipeline consumes: the
/// version file and the commit-id file.
///
/// The version file is only rewritten when its content would change, so an
/// unchanged build leaves its timestamp alone. The commit-id file is written
/// on every run; downstream tooling relies on its timestamp moving.
pub struct FilePersistence {
    version_path: PathBuf,
    sha_path: PathBuf,
}

impl FilePersistence {
    pub fn new(root: &Path, version_file: &Path, sha_file: &Path) -> Self {
        FilePersistence {
            version_path: root.join(version_file),
            sha_path: root.join(sha_file),
        }
    }

    pub fn version_path(&self) -> &Path {
        &self.version_path
    }

    pub fn sha_path(&self) -> &Path {
        &self.sha_path
    }

    /// Read the raw persisted version string, trimmed.
    pub fn read_raw_version(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.version_path)?.trim().to_string())
    }

    /// Write `resolved` to the version file if it differs from the stored
    /// value. Returns whether a write happened. The file is written with no
    /// trailing newline.
    pub fn write_version(&self, resolved: &str) -> Result<bool> {
        let current = fs::read_to_string(&self.version_path)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if current == resolved {
            return Ok(false);
        }

        fs::write(&self.version_path, resolved)?;
        Ok(true)
    }

    /// Write the commit id file. Writes `n/a` when no hash is available.
    /// Always writes, even when the content is unchanged.
    pub fn write_commit_id(&self, sha: Option<&str>) -> Result<()> {
        fs::write(&self.sha_path, sha.unwrap_or(NO_SHA_MARKER))?;
        Ok(())
    }
}

//! Rule file store: listing, reading, writing and merging.

use tracing::debug;

use crate::{Error, NormalizedPath, Result, io};

/// Filesystem access for rule files.
///
/// Stateless; every call goes straight to disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    /// List files matching a glob pattern, sorted by path.
    ///
    /// Unreadable entries are skipped. A pattern that matches nothing, or
    /// points into a missing directory, yields an empty list.
    pub fn list(&self, pattern: &str) -> Result<Vec<NormalizedPath>> {
        let entries = glob::glob(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut files: Vec<NormalizedPath> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .map(NormalizedPath::from)
            .collect();
        files.sort();

        debug!(pattern, count = files.len(), "listed rule files");
        Ok(files)
    }

    pub fn read(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    pub fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        io::write_text(path, content)
    }

    pub fn ensure_dir(&self, path: &NormalizedPath) -> Result<()> {
        io::ensure_dir(path)
    }

    /// Merge whole files, trimming each and separating them by one blank line.
    ///
    /// All files are read before anything is returned; a single failed read
    /// fails the merge.
    pub fn merge(&self, files: &[NormalizedPath]) -> Result<String> {
        if files.is_empty() {
            return Err(Error::NothingToMerge);
        }

        let parts = files
            .iter()
            .map(|file| self.read(file).map(|content| content.trim().to_string()))
            .collect::<Result<Vec<_>>>()?;

        Ok(parts.join("\n\n"))
    }
}

//! Rule files and ordered selections of them.

use rules_blocks::{BlockKind, CategoryCatalog};
use rules_fs::NormalizedPath;

use crate::{Error, Result};

/// A rule file on disk, identified by its path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleFile {
    pub path: NormalizedPath,
}

impl RuleFile {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self { path: path.into() }
    }

    /// Last path segment, or the whole path if it has none.
    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or(self.path.as_str())
    }

    /// Block kind implied by the file's location.
    ///
    /// # Errors
    /// [`Error::CategoryUndeterminable`] if the path is outside the
    /// category directories.
    pub fn kind(&self, catalog: &CategoryCatalog) -> Result<BlockKind> {
        catalog
            .kind_of(self.path.as_str())
            .ok_or_else(|| Error::CategoryUndeterminable {
                path: self.path.to_native(),
            })
    }
}

impl std::fmt::Display for RuleFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Ordered, duplicate-free list of files to merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    files: Vec<RuleFile>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file; returns `false` if it was already selected.
    pub fn push(&mut self, file: RuleFile) -> bool {
        if self.files.contains(&file) {
            return false;
        }
        self.files.push(file);
        true
    }

    pub fn extend(&mut self, files: impl IntoIterator<Item = RuleFile>) {
        for file in files {
            self.push(file);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a RuleFile;
    type IntoIter = std::slice::Iter<'a, RuleFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_blocks::Category;

    #[test]
    fn test_selection_rejects_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.push(RuleFile::new("/r/clinerules/system/clinerules_a.md")));
        assert!(set.push(RuleFile::new("/r/clinerules/project/clinerules_b.md")));
        assert!(!set.push(RuleFile::new("/r/clinerules/system/clinerules_a.md")));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().file_name(), "clinerules_a.md");
    }

    #[test]
    fn test_kind_of_language_file() {
        let file = RuleFile::new("/r/clinerules/languages/clinerules_language_go.md");
        let kind = file.kind(&CategoryCatalog::default()).unwrap();
        assert_eq!(kind.category, Category::Language);
        assert_eq!(kind.language.as_deref(), Some("GO"));
    }

    #[test]
    fn test_kind_outside_tree_fails() {
        let file = RuleFile::new("/tmp/clinerules_core.md");
        let result = file.kind(&CategoryCatalog::default());
        assert!(matches!(result, Err(Error::CategoryUndeterminable { .. })));
    }
}

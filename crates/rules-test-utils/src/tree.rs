//! [`RulesTree`] builder for rules workspace fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Category directories of a complete layout, in menu order.
pub const CATEGORY_DIRS: [&str; 5] = ["cline", "general", "system", "project", "languages"];

/// A temporary rules root.
///
/// # Example
///
/// ```rust,no_run
/// use rules_test_utils::RulesTree;
///
/// let tree = RulesTree::with_layout();
/// let core = tree.add_rule("system", "clinerules_core.md", "### BEGIN SYSTEM\nuse bash");
/// let external = tree.write("external/.clinerules", "### BEGIN SYSTEM\nuse zsh");
/// assert!(core.exists() && external.exists());
/// ```
pub struct RulesTree {
    temp_dir: TempDir,
}

impl Default for RulesTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesTree {
    /// An empty root with no rules directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A root with `clinerules/` and all five category directories.
    pub fn with_layout() -> Self {
        let tree = Self::new();
        for dir in CATEGORY_DIRS {
            fs::create_dir_all(tree.rules_dir().join(dir)).unwrap();
        }
        tree
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.root().join("clinerules")
    }

    /// Write `clinerules/<category_dir>/<name>` and return its path.
    pub fn add_rule(&self, category_dir: &str, name: &str, content: &str) -> PathBuf {
        self.write(&format!("clinerules/{}/{}", category_dir, name), content)
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative))
            .unwrap_or_else(|e| panic!("RulesTree::read: {} unreadable: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }
}

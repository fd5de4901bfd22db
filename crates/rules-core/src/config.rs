//! Configuration and the workspace it applies to.
//!
//! The workspace root is always passed in explicitly. Settings come from
//! defaults, overridden by an optional `rules.toml` at the root.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rules_blocks::CategoryCatalog;
use rules_fs::{ConfigStore, NormalizedPath};

use crate::Result;

/// Name of the optional configuration file at the workspace root.
pub const CONFIG_FILE: &str = "rules.toml";

/// Commands used to display block differences.
///
/// Each command gets the external and local block file paths appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffToolConfig {
    pub inline: Vec<String>,
    pub side_by_side: Vec<String>,
    /// Directory under the root receiving the side-by-side block files.
    pub scratch_dir: String,
}

impl Default for DiffToolConfig {
    fn default() -> Self {
        Self {
            inline: ["git", "diff", "--no-index", "--color=always", "--word-diff=color"]
                .map(String::from)
                .to_vec(),
            side_by_side: ["code", "--diff"].map(String::from).to_vec(),
            scratch_dir: "tmp".to_string(),
        }
    }
}

/// Rules Manager settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Directory under the root holding the category directories.
    pub rules_dir: String,
    /// Directory under the root receiving the merged file.
    pub output_dir: String,
    /// File name of the merged output.
    pub output_name: String,
    /// Glob for rule files inside each category directory.
    pub file_pattern: String,
    pub diff: DiffToolConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rules_dir: "clinerules".to_string(),
            output_dir: "output".to_string(),
            output_name: ".clinerules".to_string(),
            file_pattern: "clinerules*.md".to_string(),
            diff: DiffToolConfig::default(),
        }
    }
}

/// A rules root together with its configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: NormalizedPath,
    pub config: RulesConfig,
}

impl Workspace {
    pub fn new(root: impl Into<NormalizedPath>, config: RulesConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Open a workspace, reading `rules.toml` from the root when present.
    pub fn load(root: impl Into<NormalizedPath>) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);
        let config = ConfigStore::new()
            .load_optional::<RulesConfig>(&config_path)?
            .unwrap_or_default();
        debug!(root = %root, ?config, "loaded workspace");
        Ok(Self { root, config })
    }

    /// Category catalog anchored on the last segment of the rules directory.
    pub fn catalog(&self) -> CategoryCatalog {
        let anchor = self
            .config
            .rules_dir
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(self.config.rules_dir.as_str());
        CategoryCatalog::new(anchor)
    }

    pub fn rules_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.rules_dir)
    }

    pub fn output_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.output_dir)
    }

    pub fn output_path(&self) -> NormalizedPath {
        self.output_dir().join(&self.config.output_name)
    }

    pub fn scratch_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.diff.scratch_dir)
    }
}

//! Merging selected rule files into the output file.

use tracing::info;

use rules_fs::{FileStore, NormalizedPath};

use crate::{Result, RuleFile, SelectionSet, Workspace};

/// Writes merged rule files to the workspace output path.
pub struct OutputWriter {
    store: FileStore,
    output_dir: NormalizedPath,
    output_path: NormalizedPath,
}

impl OutputWriter {
    pub fn new(workspace: &Workspace) -> Self {
        Self {
            store: FileStore::new(),
            output_dir: workspace.output_dir(),
            output_path: workspace.output_path(),
        }
    }

    pub fn output_path(&self) -> &NormalizedPath {
        &self.output_path
    }

    /// Concatenate whole files, trimmed, one blank line apart.
    ///
    /// Fails without output if `files` is empty or any file is unreadable.
    pub fn merge(&self, files: &[RuleFile]) -> Result<String> {
        let paths: Vec<NormalizedPath> = files.iter().map(|f| f.path.clone()).collect();
        Ok(self.store.merge(&paths)?)
    }

    /// Write `content` to the output path, creating the output directory.
    pub fn write_output(&self, content: &str) -> Result<&NormalizedPath> {
        self.store.ensure_dir(&self.output_dir)?;
        self.store.write(&self.output_path, content)?;
        Ok(&self.output_path)
    }

    /// Merge a selection and write it out.
    pub fn process(&self, selection: &SelectionSet) -> Result<&NormalizedPath> {
        let files: Vec<RuleFile> = selection.iter().cloned().collect();
        let merged = self.merge(&files)?;
        let path = self.write_output(&merged)?;

        info!("Files merged successfully into {}", path);
        info!("Merged files:");
        for file in selection {
            info!("- {}", file);
        }
        Ok(path)
    }
}

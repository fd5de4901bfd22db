//! Category listings and interactive file selection.

use tracing::{debug, info, warn};

use rules_blocks::Category;
use rules_fs::FileStore;

use crate::input::{InputProvider, choose_index};
use crate::{Error, Result, RuleFile, SelectionSet, Workspace};

/// Lists rule files per category and lets the user pick among them.
pub struct FileSelector<'a> {
    workspace: &'a Workspace,
    store: FileStore,
}

impl<'a> FileSelector<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            store: FileStore::new(),
        }
    }

    /// Files of one category, sorted by path.
    ///
    /// A missing directory or an unusable pattern yields an empty list.
    pub fn list_category(&self, category: Category) -> Vec<RuleFile> {
        let dir = self.workspace.rules_dir().join(category.dir_name());
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(dir.as_str()),
            self.workspace.config.file_pattern
        );

        match self.store.list(&pattern) {
            Ok(paths) => paths.into_iter().map(RuleFile::new).collect(),
            Err(e) => {
                warn!(%category, error = %e, "could not list category");
                Vec::new()
            }
        }
    }

    /// Listings for every category, in menu order.
    pub fn files_by_category(&self) -> Vec<(Category, Vec<RuleFile>)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.list_category(category)))
            .collect()
    }

    /// Let the user pick one file of `category`, or skip with empty input.
    pub fn select_one(
        &self,
        category: Category,
        input: &mut dyn InputProvider,
    ) -> Result<Option<RuleFile>> {
        let files = self.list_category(category);
        if files.is_empty() {
            info!("No {} files found", category.label().to_lowercase());
            return Ok(None);
        }

        show_numbered(input, category.label(), &files, 1);
        let prompt = format!(
            "Select {} file number (press Enter to skip)",
            category.label().to_lowercase()
        );
        let choice = choose_index(files.len(), &prompt, true, input)?;
        Ok(choice.map(|idx| files[idx].clone()))
    }

    /// Let the user pick files of `category` one at a time.
    ///
    /// Ends on empty input or once every file is picked. Files come back
    /// in the order they were picked.
    pub fn select_many(
        &self,
        category: Category,
        input: &mut dyn InputProvider,
    ) -> Result<Vec<RuleFile>> {
        let files = self.list_category(category);
        if files.is_empty() {
            info!("No {} files found", category.label().to_lowercase());
            return Ok(Vec::new());
        }

        let mut selected: Vec<RuleFile> = Vec::new();
        loop {
            let remaining: Vec<&RuleFile> =
                files.iter().filter(|f| !selected.contains(f)).collect();
            if remaining.is_empty() {
                break;
            }

            input.notify("");
            input.notify("Currently selected files:");
            for file in &selected {
                input.notify(&format!("- {}", file));
            }
            input.notify("");
            input.notify("Remaining files:");
            for (i, file) in remaining.iter().enumerate() {
                input.notify(&format!("{}. {}", i + 1, file));
            }

            let prompt = format!(
                "Select a {} number (press Enter to finish)",
                category.label().to_lowercase()
            );
            let Some(idx) = choose_index(remaining.len(), &prompt, true, input)? else {
                break;
            };
            let choice = remaining[idx].clone();
            info!("Added {}", choice);
            selected.push(choice);
        }

        Ok(selected)
    }

    /// Let the user pick one file from all categories under one numbering.
    ///
    /// # Errors
    /// [`Error::NoLocalFiles`] if no category has any file.
    pub fn select_from_all(&self, prompt: &str, input: &mut dyn InputProvider) -> Result<RuleFile> {
        let mut all = Vec::new();
        for (category, files) in self.files_by_category() {
            if !files.is_empty() {
                show_numbered(input, category.label(), &files, all.len() + 1);
                all.extend(files);
            }
        }

        if all.is_empty() {
            return Err(Error::NoLocalFiles);
        }

        let idx = choose_index(all.len(), prompt, false, input)?.ok_or(Error::NoSelection)?;
        debug!(file = %all[idx].path, "selected local file");
        Ok(all.swap_remove(idx))
    }

    /// Build the merge selection: one optional file each for cline,
    /// general, system and project, then any number of language files.
    pub fn select_all(&self, input: &mut dyn InputProvider) -> Result<SelectionSet> {
        let mut selection = SelectionSet::new();
        for category in Category::ALL {
            if category == Category::Language {
                selection.extend(self.select_many(category, input)?);
            } else if let Some(file) = self.select_one(category, input)? {
                selection.push(file);
            }
        }
        Ok(selection)
    }
}

fn show_numbered(input: &mut dyn InputProvider, label: &str, files: &[RuleFile], start: usize) {
    input.notify("");
    input.notify(&format!("{} files:", label));
    for (i, file) in files.iter().enumerate() {
        input.notify(&format!("{}. {}", start + i, file));
    }
}

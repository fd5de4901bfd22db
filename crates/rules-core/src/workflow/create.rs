use tracing::info;

use rules_fs::NormalizedPath;

use crate::input::InputProvider;
use crate::{Error, FileSelector, OutputWriter, Result, Workspace, layout};

/// Merge interactively selected rule files into the workspace output file.
///
/// Returns the path written.
///
/// # Errors
/// - [`Error::LayoutMissing`] if the category directories are incomplete
/// - [`Error::NoSelection`] if the user skipped every category
pub fn create(workspace: &Workspace, input: &mut dyn InputProvider) -> Result<NormalizedPath> {
    layout::validate(workspace)?;

    let selection = FileSelector::new(workspace).select_all(input)?;
    if selection.is_empty() {
        return Err(Error::NoSelection);
    }

    let writer = OutputWriter::new(workspace);
    let path = writer.process(&selection)?.clone();
    info!(files = selection.len(), "created rules file");
    Ok(path)
}

use tracing::info;

use rules_blocks::{BlockKind, blocks_equal, extract};
use rules_fs::{FileStore, NormalizedPath};

use crate::diff::{BlockInfo, DiffPresenter, DiffSummary};
use crate::input::{InputProvider, choose_diff_mode};
use crate::{FileSelector, Result, Workspace};

/// Result of comparing a local block with the external file's block.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    /// Both blocks match after trimming.
    Identical { kind: BlockKind },
    /// The blocks differ and the diff was shown.
    Different { kind: BlockKind, summary: DiffSummary },
}

/// Compare the block of a selected local file with the same block in `external`.
pub fn compare(
    workspace: &Workspace,
    external: &NormalizedPath,
    input: &mut dyn InputProvider,
    presenter: &DiffPresenter,
) -> Result<CompareOutcome> {
    super::require_file(external)?;

    let local =
        FileSelector::new(workspace).select_from_all("Select file number to compare", input)?;
    super::require_file(&local.path)?;

    let store = FileStore::new();
    let external_content = store.read(external)?;
    let local_content = store.read(&local.path)?;

    let kind = local.kind(&workspace.catalog())?;
    let filename = local.path.as_str();
    let external_block = extract(&external_content, kind.category, filename)?;
    let local_block = extract(&local_content, kind.category, filename)?;

    if blocks_equal(&external_block.text, &local_block.text) {
        info!(%kind, "blocks are identical");
        return Ok(CompareOutcome::Identical { kind });
    }

    let summary = DiffSummary::compute(&external_block.text, &local_block.text);
    let info = BlockInfo {
        kind: &kind,
        file_name: local.file_name(),
        path: local.path.as_str(),
    };
    input.notify("");
    for line in info.to_string().lines() {
        input.notify(line);
    }
    input.notify(&format!("Changes: {}", summary));

    let mode = choose_diff_mode(input)?;
    presenter.show(mode, &external_block.text, &local_block.text, &kind)?;

    Ok(CompareOutcome::Different { kind, summary })
}

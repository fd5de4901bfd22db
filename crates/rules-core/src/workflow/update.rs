use tracing::info;

use rules_blocks::{BlockKind, extract, find_bounds, replace};
use rules_fs::{FileStore, NormalizedPath};

use crate::input::InputProvider;
use crate::{Error, FileSelector, Result, RuleFile, Workspace};

/// What an update wrote, and where its block came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub kind: BlockKind,
    pub source: NormalizedPath,
    pub target: NormalizedPath,
}

fn select_local(
    workspace: &Workspace,
    external: &NormalizedPath,
    input: &mut dyn InputProvider,
) -> Result<RuleFile> {
    super::require_file(external)?;
    FileSelector::new(workspace).select_from_all("Select file", input)
}

/// Overwrite a selected local file with the matching block of `external`.
pub fn update_local(
    workspace: &Workspace,
    external: &NormalizedPath,
    input: &mut dyn InputProvider,
) -> Result<UpdateReport> {
    let local = select_local(workspace, external, input)?;
    let store = FileStore::new();

    let external_content = store.read(external)?;
    let kind = local.kind(&workspace.catalog())?;
    let block = extract(&external_content, kind.category, local.path.as_str())?;

    store.write(&local.path, &format!("{}\n", block.text))?;
    info!("Successfully updated {}", local.file_name());

    Ok(UpdateReport {
        kind,
        source: external.clone(),
        target: local.path,
    })
}

/// Replace the matching block of `external` with a selected local file's block.
///
/// Whitespace between the old block and whatever follows it is kept, so
/// neighbouring blocks stay where they were.
pub fn update_external(
    workspace: &Workspace,
    external: &NormalizedPath,
    input: &mut dyn InputProvider,
) -> Result<UpdateReport> {
    let local = select_local(workspace, external, input)?;
    let store = FileStore::new();

    let local_content = store.read(&local.path)?;
    let external_content = store.read(external)?;
    let kind = local.kind(&workspace.catalog())?;
    let filename = local.path.as_str();

    let local_block = extract(&local_content, kind.category, filename)?;
    let updated = splice_block(&external_content, &local_block.text, &kind, filename)
        .ok_or_else(|| Error::BlockNotReplaced {
            path: external.to_native(),
        })?;

    store.write(external, &updated)?;
    info!("Successfully updated block in {}", external.file_name().unwrap_or(external.as_str()));
    info!("Using content from {}", local.file_name());

    Ok(UpdateReport {
        kind,
        source: local.path,
        target: external.clone(),
    })
}

/// Replace the block of `kind` with `block`, keeping the old block's
/// trailing whitespace.
fn splice_block(content: &str, block: &str, kind: &BlockKind, filename: &str) -> Option<String> {
    let (start, end) = find_bounds(content, kind.category, filename)?;
    let span = &content[start..end];
    let trailing = &span[span.trim_end().len()..];
    replace(content, &format!("{}{}", block, trailing), kind.category, filename)
}

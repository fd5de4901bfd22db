//! Extraction and in-place replacement of marker-delimited blocks.
//!
//! Searches are plain substring searches: the first occurrence of a
//! category's marker starts its block, and the first `### BEGIN` after the
//! marker text ends it. Only the first block of a category is reachable.

use tracing::{debug, warn};

use crate::catalog::{Category, MARKER_PREFIX, marker_for};
use crate::error::{Error, Result};

/// A block extracted from rule file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The marker line that opened the block.
    pub marker: String,
    /// The block text, marker included, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offsets of the untrimmed block within the source content.
    pub start: usize,
    pub end: usize,
}

/// Byte offsets of the block opened by `marker`, if present.
fn bounds_of(content: &str, marker: &str) -> Option<(usize, usize)> {
    let start = content.find(marker)?;
    let after_marker = start + marker.len();
    let end = content[after_marker..]
        .find(MARKER_PREFIX)
        .map_or(content.len(), |offset| after_marker + offset);
    Some((start, end))
}

fn resolve_marker(category: Category, filename: &str) -> Result<String> {
    marker_for(category, filename).ok_or_else(|| {
        warn!(%category, filename, "could not determine start pattern");
        Error::NoMarkerPattern {
            category,
            filename: filename.to_string(),
        }
    })
}

/// Extract the block of `category` from `content`.
///
/// # Errors
/// - [`Error::NoMarkerPattern`] if the marker cannot be derived from `filename`
/// - [`Error::MarkerNotFound`] if the marker does not occur in `content`
///
/// # Example
/// ```
/// use rules_blocks::{Category, extract};
///
/// let content = "### BEGIN SYSTEM\nfoo\n### BEGIN PROJECT\nbar";
/// let block = extract(content, Category::System, "clinerules_core.md").unwrap();
/// assert_eq!(block.text, "### BEGIN SYSTEM\nfoo");
/// ```
pub fn extract(content: &str, category: Category, filename: &str) -> Result<Block> {
    let marker = resolve_marker(category, filename)?;
    let Some((start, end)) = bounds_of(content, &marker) else {
        warn!(%marker, filename, "start pattern not found");
        return Err(Error::MarkerNotFound {
            marker,
            filename: filename.to_string(),
        });
    };

    debug!(%marker, start, end, "extracted block");
    Ok(Block {
        text: content[start..end].trim().to_string(),
        marker,
        start,
        end,
    })
}

/// Byte offsets `(start, end)` of the untrimmed block of `category`.
pub fn find_bounds(content: &str, category: Category, filename: &str) -> Option<(usize, usize)> {
    let marker = marker_for(category, filename)?;
    bounds_of(content, &marker)
}

/// Replace the block of `category` in `content` with `new_block`.
///
/// `new_block` is inserted verbatim and should already begin with the
/// marker line. Returns `None` if the block is not found.
///
/// # Example
/// ```
/// use rules_blocks::{Category, replace};
///
/// let content = "### BEGIN SYSTEM\nfoo\n### BEGIN PROJECT\nbar";
/// let updated = replace(content, "### BEGIN SYSTEM\nfoo2\n", Category::System, "core.md");
/// assert_eq!(updated.as_deref(), Some("### BEGIN SYSTEM\nfoo2\n### BEGIN PROJECT\nbar"));
/// ```
pub fn replace(
    content: &str,
    new_block: &str,
    category: Category,
    filename: &str,
) -> Option<String> {
    let (start, end) = find_bounds(content, category, filename)?;

    let mut updated = String::with_capacity(content.len() - (end - start) + new_block.len());
    updated.push_str(&content[..start]);
    updated.push_str(new_block);
    updated.push_str(&content[end..]);
    Some(updated)
}

/// Compare two blocks, ignoring leading and trailing whitespace only.
pub fn blocks_equal(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

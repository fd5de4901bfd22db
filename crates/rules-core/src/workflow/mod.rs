//! End-to-end operations on a rules workspace.
//!
//! Each workflow runs to completion or fails with a single error; none of
//! them leaves a partially written file behind.

mod compare;
mod create;
mod update;

pub use compare::{CompareOutcome, compare};
pub use create::create;
pub use update::{UpdateReport, update_external, update_local};

use rules_fs::NormalizedPath;

use crate::{Error, Result};

/// Fail with [`Error::FileNotFound`] unless `path` is an existing file.
fn require_file(path: &NormalizedPath) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        tracing::error!("File not found: {}", path);
        Err(Error::FileNotFound {
            path: path.to_native(),
        })
    }
}

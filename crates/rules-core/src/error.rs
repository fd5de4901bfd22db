//! Error types for rules-core

use std::path::PathBuf;

/// Result type for rules-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rules-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file named on the command line does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The path is not under a known category directory
    #[error("Could not determine block type from path: {path}")]
    CategoryUndeterminable { path: PathBuf },

    /// The target content has no block to replace
    #[error("Could not replace block in file: {path}")]
    BlockNotReplaced { path: PathBuf },

    /// A required directory of the rules layout is missing
    #[error("Directory not found: {path}")]
    LayoutMissing { path: PathBuf },

    /// Nothing was selected where a selection is required
    #[error("No sections were selected. At least one section is required.")]
    NoSelection,

    /// The rules tree holds no candidate files
    #[error("No local files found")]
    NoLocalFiles,

    /// Input ended while waiting for a choice
    #[error("Input closed before a selection was made")]
    InputClosed,

    /// Reading interactive input failed
    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    /// A diff tool could not be launched
    #[error("Failed to run diff tool '{tool}': {source}")]
    DiffTool {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from rules-fs
    #[error(transparent)]
    Fs(#[from] rules_fs::Error),

    /// Block error from rules-blocks
    #[error(transparent)]
    Block(#[from] rules_blocks::Error),
}

//! Category catalog and block editing for Rules Manager.
//!
//! Rule files are plain Markdown split into blocks by marker lines:
//!
//! ```text
//! ### BEGIN SYSTEM
//! system rules...
//! ### BEGIN LANGUAGE PYTHON
//! python rules...
//! ```
//!
//! A block starts at its category marker and runs up to the next
//! `### BEGIN` of any kind, or to the end of the text. The [`catalog`]
//! module decides which category a file belongs to and which marker opens
//! its block; the [`extractor`] module finds, extracts and replaces blocks.

pub mod catalog;
pub mod error;
pub mod extractor;

pub use catalog::{
    BlockKind, Category, CategoryCatalog, MARKER_PREFIX, category_of, language_of, marker_for,
};
pub use error::{Error, Result};
pub use extractor::{Block, blocks_equal, extract, find_bounds, replace};

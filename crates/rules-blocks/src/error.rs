//! Error types for rules-blocks

use crate::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The marker for this category cannot be derived from the file name.
    #[error("Could not determine start pattern for {category} block in {filename}")]
    NoMarkerPattern { category: Category, filename: String },

    /// The marker does not occur in the content.
    #[error("Could not find start pattern '{marker}' in {filename}")]
    MarkerNotFound { marker: String, filename: String },
}

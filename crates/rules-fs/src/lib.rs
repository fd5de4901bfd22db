//! Filesystem access for Rules Manager
//!
//! Path normalization, text I/O with atomic writes, glob listing of rule
//! files and whole-file merging.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::FileStore;

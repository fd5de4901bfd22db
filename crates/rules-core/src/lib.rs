//! Core orchestration for Rules Manager.
//!
//! Ties the block catalog and the file store together:
//!
//! - [`Workspace`] - root directory plus configuration
//! - [`FileSelector`] - category listings and numbered-menu selection
//! - [`OutputWriter`] - merging selected files into the output file
//! - [`DiffPresenter`] - showing block differences in an external tool
//! - [`workflow`] - create, compare, update-local and update-external

pub mod config;
pub mod diff;
pub mod error;
pub mod input;
pub mod layout;
pub mod merge;
pub mod rule;
pub mod selector;
pub mod workflow;

pub use config::{DiffToolConfig, RulesConfig, Workspace};
pub use diff::{
    BlockInfo, DiffMode, DiffPresenter, DiffStrategy, DiffSummary, InlineDiff, SideBySideDiff,
};
pub use error::{Error, Result};
pub use input::{InputProvider, ScriptedInput, choose_diff_mode, choose_index};
pub use merge::OutputWriter;
pub use rule::{RuleFile, SelectionSet};
pub use selector::FileSelector;

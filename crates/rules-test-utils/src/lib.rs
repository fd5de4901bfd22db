//! Shared test utilities for the rules-manager workspace.
//!
//! Provides [`RulesTree`], a temporary `<root>/clinerules/<category>/`
//! layout with helpers to add rule files and read results back. It is a
//! dev-dependency only and never published.

pub mod tree;

pub use tree::{CATEGORY_DIRS, RulesTree};

//! Command implementations for rules-cli
//!
//! Each command runs one workflow and prints its outcome. A failed workflow
//! is reported here and does not change the exit status.

pub mod compare;
pub mod create;
pub mod update;

pub use compare::run_compare;
pub use create::run_create;
pub use update::{run_update_external, run_update_local};

use colored::Colorize;

use rules_core::{Error, Workspace, layout};

use crate::error::CliError;

/// Log `error` and print the failure line for `action`.
pub fn report_failure(workspace: Option<&Workspace>, action: &str, error: &CliError) {
    tracing::error!("{}", error);
    for line in failure_lines(workspace, action, error) {
        println!("{}", line);
    }
}

/// Failure message, followed by the expected tree when a layout directory
/// is missing.
fn failure_lines(workspace: Option<&Workspace>, action: &str, error: &CliError) -> Vec<String> {
    let mut lines = vec![format!("{} Failed to {}: {}", "ERROR".red().bold(), action, error)];

    if let (Some(workspace), CliError::Core(Error::LayoutMissing { .. })) = (workspace, error) {
        lines.push(String::new());
        lines.extend(layout::expected_structure(workspace));
    }
    lines
}

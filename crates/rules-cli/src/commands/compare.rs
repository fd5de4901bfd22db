//! Compare command implementation

use std::path::Path;

use colored::Colorize;

use rules_core::{DiffPresenter, InputProvider, Workspace, workflow};
use rules_core::workflow::CompareOutcome;
use rules_fs::NormalizedPath;

use crate::error::Result;

/// Run the compare command
pub fn run_compare(
    workspace: &Workspace,
    external_file: &Path,
    input: &mut dyn InputProvider,
) -> Result<()> {
    let external = NormalizedPath::new(external_file);
    let presenter = DiffPresenter::for_workspace(workspace);

    match workflow::compare(workspace, &external, input, &presenter)? {
        CompareOutcome::Identical { kind } => {
            println!();
            println!("{} Blocks are identical ({})", "OK".green().bold(), kind);
        }
        CompareOutcome::Different { kind, summary } => {
            println!(
                "{} {} differs from {}: {}",
                "DIFF".yellow().bold(),
                kind,
                external.as_str().cyan(),
                summary
            );
        }
    }

    Ok(())
}

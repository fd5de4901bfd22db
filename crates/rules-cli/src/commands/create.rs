//! Create command implementation

use colored::Colorize;

use rules_core::{InputProvider, Workspace, workflow};

use crate::error::Result;

/// Run the create command
///
/// Walks the category menus and writes the merged output file.
pub fn run_create(workspace: &Workspace, input: &mut dyn InputProvider) -> Result<()> {
    println!("{} Building {}", "=>".blue().bold(), workspace.config.output_name.cyan());

    let written = workflow::create(workspace, input)?;

    println!("{} Created {}", "OK".green().bold(), written.as_str().cyan());
    Ok(())
}

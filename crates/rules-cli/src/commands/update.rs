//! Update command implementations
//!
//! `update-local` copies a block from the external file into a rule file,
//! `update-external` does the reverse.

use std::path::Path;

use colored::Colorize;

use rules_core::{InputProvider, Workspace, workflow};
use rules_fs::NormalizedPath;

use crate::error::Result;

/// Run the update-local command
pub fn run_update_local(
    workspace: &Workspace,
    external_file: &Path,
    input: &mut dyn InputProvider,
) -> Result<()> {
    let external = NormalizedPath::new(external_file);
    let report = workflow::update_local(workspace, &external, input)?;

    println!(
        "{} Updated {} with {} from {}",
        "OK".green().bold(),
        report.target.as_str().cyan(),
        report.kind,
        report.source.as_str()
    );
    Ok(())
}

/// Run the update-external command
pub fn run_update_external(
    workspace: &Workspace,
    external_file: &Path,
    input: &mut dyn InputProvider,
) -> Result<()> {
    let external = NormalizedPath::new(external_file);
    let report = workflow::update_external(workspace, &external, input)?;

    println!(
        "{} Updated {} in {} from {}",
        "OK".green().bold(),
        report.kind,
        report.target.as_str().cyan(),
        report.source.as_str()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{Error, RulesConfig, ScriptedInput};
    use rules_test_utils::RulesTree;

    use crate::error::CliError;

    #[test]
    fn test_update_external_splices_block() {
        let tree = RulesTree::with_layout();
        tree.add_rule("system", "clinerules_core.md", "### BEGIN SYSTEM\nfoo2\n");
        let external =
            tree.write("ext/.clinerules", "### BEGIN SYSTEM\nfoo\n### BEGIN PROJECT\nbar");
        let ws = Workspace::new(tree.root(), RulesConfig::default());

        let mut input = ScriptedInput::new(["1"]);
        run_update_external(&ws, &external, &mut input).unwrap();

        assert_eq!(tree.read("ext/.clinerules"), "### BEGIN SYSTEM\nfoo2\n### BEGIN PROJECT\nbar");
    }

    #[test]
    fn test_update_local_missing_external() {
        let tree = RulesTree::with_layout();
        let ws = Workspace::new(tree.root(), RulesConfig::default());

        let mut input = ScriptedInput::new(["1"]);
        let err = run_update_local(&ws, &tree.root().join("missing.md"), &mut input).unwrap_err();
        assert!(matches!(err, CliError::Core(Error::FileNotFound { .. })));
    }
}

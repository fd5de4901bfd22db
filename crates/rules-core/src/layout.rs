//! Validation of the on-disk rules layout.

use rules_blocks::Category;

use crate::{Error, Result, Workspace};

/// Check that the rules directory and every category directory exist.
///
/// Reports the first missing directory.
pub fn validate(workspace: &Workspace) -> Result<()> {
    let rules_dir = workspace.rules_dir();
    if !rules_dir.is_dir() {
        return Err(Error::LayoutMissing {
            path: rules_dir.to_native(),
        });
    }

    for category in Category::ALL {
        let dir = rules_dir.join(category.dir_name());
        if !dir.is_dir() {
            return Err(Error::LayoutMissing {
                path: dir.to_native(),
            });
        }
    }

    Ok(())
}

/// Lines describing the expected directory tree, for error output.
pub fn expected_structure(workspace: &Workspace) -> Vec<String> {
    let mut lines = vec![
        "Expected directory structure:".to_string(),
        format!("{}/", workspace.config.rules_dir),
    ];
    for category in Category::ALL {
        lines.push(format!(
            "  ├── {}/    {}",
            category.dir_name(),
            category.description()
        ));
    }
    lines
}

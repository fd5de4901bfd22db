//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rules Manager - Build and synchronize block-structured rules files
#[derive(Parser, Debug)]
#[command(name = "rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing clinerules/ and output/ (defaults to the current directory)
    #[arg(long, global = true, env = "RULES_ROOT")]
    pub root: Option<PathBuf>,

    /// File name of the merged output (e.g. .clinerules or clinerules)
    #[arg(long, global = true)]
    pub output_name: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge selected rule files into output/.clinerules
    ///
    /// Prompts for one cline, general, system and project file (each may be
    /// skipped) and any number of language files.
    Create,

    /// Compare a local block with the same block in an external file
    Compare {
        /// Path to external clinerules file
        external_file: PathBuf,
    },

    /// Update a local rule file with the matching block of an external file
    UpdateLocal {
        /// Path to external clinerules file
        external_file: PathBuf,
    },

    /// Replace a block of an external file with a local rule file's block
    UpdateExternal {
        /// Path to external clinerules file
        external_file: PathBuf,
    },
}

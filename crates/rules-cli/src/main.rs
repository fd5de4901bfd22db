//! Rules Manager CLI
//!
//! Builds a combined rules file from per-category rule files and keeps
//! blocks in sync with external rules files.

mod cli;
mod commands;
mod console;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rules_core::Workspace;

use cli::{Cli, Commands};
use console::ConsoleInput;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    let Some(cmd) = cli.command else {
        println!("{} Rules Manager CLI", "rules".green().bold());
        println!();
        println!("Run {} for available commands.", "rules --help".cyan());
        return Ok(());
    };

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    execute_command(cmd, root, cli.output_name);
    Ok(())
}

/// INFO by default, DEBUG with `--verbose`; `RUST_LOG` wins when set.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))
}

fn action_for(cmd: &Commands) -> &'static str {
    match cmd {
        Commands::Create => "create rules file",
        Commands::Compare { .. } => "compare rules files",
        Commands::UpdateLocal { .. } => "update local file",
        Commands::UpdateExternal { .. } => "update external file",
    }
}

/// Run `cmd` against the workspace at `root`, reporting any failure.
fn execute_command(cmd: Commands, root: PathBuf, output_name: Option<String>) {
    let action = action_for(&cmd);

    let workspace = match load_workspace(root, output_name) {
        Ok(workspace) => workspace,
        Err(e) => {
            commands::report_failure(None, action, &e);
            return;
        }
    };

    let mut input = ConsoleInput::new();
    let result = match &cmd {
        Commands::Create => commands::run_create(&workspace, &mut input),
        Commands::Compare { external_file } => {
            commands::run_compare(&workspace, external_file, &mut input)
        }
        Commands::UpdateLocal { external_file } => {
            commands::run_update_local(&workspace, external_file, &mut input)
        }
        Commands::UpdateExternal { external_file } => {
            commands::run_update_external(&workspace, external_file, &mut input)
        }
    };

    if let Err(e) = result {
        commands::report_failure(Some(&workspace), action, &e);
    }
}

fn load_workspace(root: PathBuf, output_name: Option<String>) -> Result<Workspace> {
    let mut workspace = Workspace::load(root)?;
    if let Some(name) = output_name {
        workspace.config.output_name = name;
    }
    Ok(workspace)
}

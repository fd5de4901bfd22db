//! Presenting block differences through external diff tools.
//!
//! Both blocks are written to files and handed to a configured command.
//! The inline tool runs in the foreground on short-lived temp files. The
//! side-by-side viewer is launched and left running on files kept in the
//! workspace scratch directory.

use std::io::Write;
use std::process::{Command, Stdio};

use similar::{ChangeTag, TextDiff};
use tempfile::NamedTempFile;
use tracing::debug;

use rules_blocks::BlockKind;

use rules_fs::{NormalizedPath, io};

use crate::{Error, Result, Workspace};

/// How to present a block difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    /// Colored word diff in the terminal.
    Inline,
    /// Visual diff in an editor window.
    SideBySide,
}

/// A way of showing two block versions to the user.
pub trait DiffStrategy {
    /// Show `external` against `local`. Returns once the tool was launched.
    fn show(&self, external: &str, local: &str, kind: &BlockKind) -> Result<()>;
}

fn write_temp(prefix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".md")
        .tempfile()
        .map_err(|e| rules_fs::Error::io(std::env::temp_dir(), e))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| rules_fs::Error::io(file.path(), e))?;
    Ok(file)
}

fn split_command(command: &[String]) -> Result<(&str, &[String])> {
    match command.split_first() {
        Some((program, args)) => Ok((program.as_str(), args)),
        None => Err(Error::DiffTool {
            tool: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty diff command"),
        }),
    }
}

/// Runs a terminal diff tool and waits for it.
///
/// The tool's exit status is ignored: diff tools exit non-zero when the
/// inputs differ.
#[derive(Debug, Clone)]
pub struct InlineDiff {
    command: Vec<String>,
}

impl InlineDiff {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl DiffStrategy for InlineDiff {
    fn show(&self, external: &str, local: &str, kind: &BlockKind) -> Result<()> {
        let (program, args) = split_command(&self.command)?;
        let external_tmp = write_temp(&format!("external_{}_", kind.slug()), external)?;
        let local_tmp = write_temp(&format!("local_{}_", kind.slug()), local)?;

        let status = Command::new(program)
            .args(args)
            .arg(external_tmp.path())
            .arg(local_tmp.path())
            .status()
            .map_err(|source| Error::DiffTool {
                tool: program.to_string(),
                source,
            })?;

        debug!(tool = program, ?status, "inline diff finished");
        Ok(())
    }
}

/// Launches a visual diff tool without waiting for it.
///
/// The viewer outlives this process, so its input files are written to a
/// fixed scratch directory as `external_<kind>_block.md` and
/// `local_<kind>_block.md`. They stay on disk and are overwritten by the
/// next comparison of the same kind.
#[derive(Debug, Clone)]
pub struct SideBySideDiff {
    command: Vec<String>,
    scratch_dir: NormalizedPath,
}

impl SideBySideDiff {
    pub fn new(command: Vec<String>, scratch_dir: NormalizedPath) -> Self {
        Self {
            command,
            scratch_dir,
        }
    }

    /// External and local block files for `kind`.
    pub fn block_files(&self, kind: &BlockKind) -> (NormalizedPath, NormalizedPath) {
        let slug = kind.slug();
        (
            self.scratch_dir.join(&format!("external_{}_block.md", slug)),
            self.scratch_dir.join(&format!("local_{}_block.md", slug)),
        )
    }
}

impl DiffStrategy for SideBySideDiff {
    fn show(&self, external: &str, local: &str, kind: &BlockKind) -> Result<()> {
        let (program, args) = split_command(&self.command)?;
        let (external_path, local_path) = self.block_files(kind);
        io::write_text(&external_path, external)?;
        io::write_text(&local_path, local)?;

        Command::new(program)
            .args(args)
            .arg(external_path.to_native())
            .arg(local_path.to_native())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::DiffTool {
                tool: program.to_string(),
                source,
            })?;

        debug!(
            tool = program,
            external = %external_path,
            local = %local_path,
            "side-by-side diff launched"
        );
        Ok(())
    }
}

/// Dispatches to the strategy matching a [`DiffMode`].
pub struct DiffPresenter {
    inline: Box<dyn DiffStrategy>,
    side_by_side: Box<dyn DiffStrategy>,
}

impl DiffPresenter {
    /// Presenter running the commands configured for `workspace`.
    pub fn for_workspace(workspace: &Workspace) -> Self {
        let config = &workspace.config.diff;
        Self::with_strategies(
            Box::new(InlineDiff::new(config.inline.clone())),
            Box::new(SideBySideDiff::new(
                config.side_by_side.clone(),
                workspace.scratch_dir(),
            )),
        )
    }

    pub fn with_strategies(
        inline: Box<dyn DiffStrategy>,
        side_by_side: Box<dyn DiffStrategy>,
    ) -> Self {
        Self {
            inline,
            side_by_side,
        }
    }

    pub fn show(
        &self,
        mode: DiffMode,
        external: &str,
        local: &str,
        kind: &BlockKind,
    ) -> Result<()> {
        match mode {
            DiffMode::Inline => self.inline.show(external, local, kind),
            DiffMode::SideBySide => self.side_by_side.show(external, local, kind),
        }
    }
}

/// Line-level change counts between two blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffSummary {
    pub inserted: usize,
    pub deleted: usize,
    pub similarity: f32,
}

impl DiffSummary {
    pub fn compute(external: &str, local: &str) -> Self {
        let diff = TextDiff::from_lines(external, local);
        let mut summary = Self {
            inserted: 0,
            deleted: 0,
            similarity: diff.ratio(),
        };
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => summary.inserted += 1,
                ChangeTag::Delete => summary.deleted += 1,
                ChangeTag::Equal => {}
            }
        }
        summary
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+{} -{} lines ({:.0}% similar)",
            self.inserted,
            self.deleted,
            self.similarity * 100.0
        )
    }
}

/// Header shown above a block comparison.
#[derive(Debug, Clone)]
pub struct BlockInfo<'a> {
    pub kind: &'a BlockKind,
    pub file_name: &'a str,
    pub path: &'a str,
}

impl std::fmt::Display for BlockInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Block Type: {}", self.kind)?;
        writeln!(f, "File: {}", self.file_name)?;
        write!(f, "Path: {}", self.path)
    }
}

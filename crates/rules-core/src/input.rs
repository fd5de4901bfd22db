//! Line-oriented user input and numbered-menu choices.
//!
//! Menu logic works against [`InputProvider`] so it can run on a terminal
//! or on a scripted queue of answers.

use std::collections::VecDeque;

use tracing::debug;

use crate::diff::DiffMode;
use crate::{Error, Result};

/// Source of user answers and sink for menu output.
pub trait InputProvider {
    /// Read one line of input after showing `prompt`.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Show a line of output to the user.
    fn notify(&mut self, message: &str);
}

/// Prompt until the user picks an item in `1..=len`, or skips.
///
/// Returns the zero-based index, or `None` when `allow_empty` is set and the
/// answer is blank. Non-numeric and out-of-range answers re-prompt.
///
/// # Errors
/// [`Error::InputClosed`] if input ends before a valid answer.
pub fn choose_index(
    len: usize,
    prompt: &str,
    allow_empty: bool,
    input: &mut dyn InputProvider,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = input.read_line(prompt).map_err(Error::Input)? else {
            return Err(Error::InputClosed);
        };
        let choice = line.trim();

        if allow_empty && choice.is_empty() {
            return Ok(None);
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => {
                debug!(choice = n, "selected item");
                return Ok(Some(n - 1));
            }
            Ok(_) => input.notify(&format!("Please enter a number between 1 and {}", len)),
            Err(_) => input.notify("Please enter a valid number"),
        }
    }
}

/// Ask which diff presentation to use.
pub fn choose_diff_mode(input: &mut dyn InputProvider) -> Result<DiffMode> {
    input.notify("");
    input.notify("Select diff tool:");
    input.notify("1. git diff (colored inline diff)");
    input.notify("2. VS Code (side-by-side diff)");

    loop {
        let Some(line) = input
            .read_line("Enter choice (1 or 2)")
            .map_err(Error::Input)?
        else {
            return Err(Error::InputClosed);
        };
        match line.trim() {
            "1" => return Ok(DiffMode::Inline),
            "2" => return Ok(DiffMode::SideBySide),
            _ => input.notify("Please enter 1 or 2"),
        }
    }
}

/// Input provider answering from a fixed queue, recording all output.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn notify(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

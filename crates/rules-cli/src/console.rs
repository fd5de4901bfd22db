//! Terminal input for menu prompts
//!
//! Uses dialoguer when stdin is a terminal and plain line reads otherwise,
//! so answers can be piped in.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use rules_core::InputProvider;

/// [`InputProvider`] backed by the process's stdin and stdout.
pub struct ConsoleInput {
    interactive: bool,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl InputProvider for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            let answer = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text();
            return match answer {
                Ok(line) => Ok(Some(line)),
                Err(e) => {
                    let dialoguer::Error::IO(e) = e;
                    if e.kind() == io::ErrorKind::UnexpectedEof {
                        Ok(None)
                    } else {
                        Err(e)
                    }
                }
            };
        }

        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

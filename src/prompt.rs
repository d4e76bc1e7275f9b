//! One-line console prompts for attended and piped input

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::Input;

use crate::Result;

/// Print `prompt` followed by `: ` and read one line of input.
///
/// On an attended terminal this goes through `dialoguer` for line editing;
/// when stdin is piped the line is read directly, so the end of the stream
/// is detected instead of prompting forever. Validation of the reply is the
/// caller's job either way.
///
/// # Errors
///
/// Returns [`crate::Error::Input`] when the stream ends or a read fails.
pub(crate) fn read_reply(prompt: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let reply = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_on(&Term::stdout())
            .map_err(io::Error::other)?;
        Ok(reply)
    } else {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(
                io::Error::new(io::ErrorKind::UnexpectedEof, "end of console input").into(),
            );
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

//! Interactive command loop
//!
//! Reads one line at a time, runs it against the address book and writes the
//! result. Handler errors become their message text here and never stop the
//! loop.

use std::io::{BufRead, Write};

use crate::error::ContactsResult;
use crate::models::AddressBook;

use super::commands::parse_input;
use super::handlers::execute;

pub const BANNER: &str = "Ласкаво просимо до асистента!";
pub const PROMPT: &str = "Введіть команду: ";

/// Why the session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator typed `exit` or `close`
    Exit,
    /// Input was exhausted
    EndOfInput,
}

/// A command loop over an exclusively borrowed address book
pub struct Session<'b> {
    book: &'b mut AddressBook,
}

impl<'b> Session<'b> {
    /// Create a session over the given book
    pub fn new(book: &'b mut AddressBook) -> Self {
        Self { book }
    }

    /// Handle a single input line
    ///
    /// Returns `None` for a blank line, otherwise the text to show and whether
    /// the session should end.
    pub fn handle_line(&mut self, line: &str) -> Option<(String, bool)> {
        let (command, args) = parse_input(line)?;
        tracing::debug!(?command, args = args.len(), "dispatching command");

        let message = execute(command, &args, self.book).unwrap_or_else(|err| {
            tracing::debug!(
                validation = err.is_validation(),
                not_found = err.is_not_found(),
                error = %err,
                "command rejected"
            );
            err.to_string()
        });
        Some((message, command.is_exit()))
    }

    /// Run until `exit`/`close` or end of input
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> ContactsResult<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", BANNER)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(SessionEnd::EndOfInput);
            }

            // Undecodable bytes become U+FFFD and fail validation like any typo
            let line = String::from_utf8_lossy(&buf);
            let Some((message, done)) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", message)?;

            if done {
                return Ok(SessionEnd::Exit);
            }
        }
    }
}

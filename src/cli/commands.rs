//! Command definitions for the interactive prompt
//!
//! Maps the first word of an input line to a command; matching is
//! case-insensitive, arguments keep their case.

use std::str::FromStr;

/// A command the operator can type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown,
}

/// Command words and their actions
static COMMANDS: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("all", Command::All),
    ("add-birthday", Command::AddBirthday),
    ("show-birthday", Command::ShowBirthday),
    ("birthdays", Command::Birthdays),
    ("exit", Command::Exit),
    ("close", Command::Exit),
];

impl Command {
    /// Whether this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.to_lowercase();
        Ok(COMMANDS
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, command)| *command)
            .unwrap_or(Command::Unknown))
    }
}

/// Split a line into a command and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command: Command = parts.next()?.parse().unwrap_or(Command::Unknown);
    Some((command, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_case_insensitive() {
        assert_eq!("ADD".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("Show-Birthday".parse::<Command>().unwrap(), Command::ShowBirthday);
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!("delete".parse::<Command>().unwrap(), Command::Unknown);
        assert!(!Command::Unknown.is_exit());
    }

    #[test]
    fn test_parse_input_splits_arguments() {
        let (command, args) = parse_input("  Add   Alice\t0501234567  ").unwrap();
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["Alice", "0501234567"]);
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, args) = parse_input("phone ALICE").unwrap();
        assert_eq!(args, vec!["ALICE"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \n").is_none());
    }
}

//! Commands understood by the assistant.
//!
//! This module provides:
//! - **Parsing**: splitting an input line into a [`Command`] and its arguments
//! - **Handlers**: one function per address-book command (see [`handlers`])
//! - **Normalization**: turning a handler's [`CommandResult`] into the text
//!   printed to the user

pub mod handlers;

pub use handlers::{
    add_birthday, add_contact, change_contact, show_all, show_birthday, show_phone,
    upcoming_birthdays,
};

use crate::error::CommandResult;
use tracing::debug;

/// Every command keyword the assistant recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Exit,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl Command {
    /// Match a keyword exactly (case-sensitive).
    pub fn parse(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "hello" => Self::Hello,
            "close" | "exit" => Self::Exit,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            _ => return None,
        };
        Some(command)
    }
}

/// Split a line on whitespace into its command keyword and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;
    Some((keyword, tokens.collect()))
}

/// Collapse a handler result into the message shown to the user.
///
/// Successful results pass through. Validation and arity errors become
/// their own messages, and a missing contact becomes "Contact not found.".
pub fn normalize(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            debug!(error = ?err, "command failed");
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::CommandError;

    #[test]
    fn test_parse_known_keywords() {
        assert_eq!(Command::parse("hello"), Some(Command::Hello));
        assert_eq!(Command::parse("close"), Some(Command::Exit));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("add-birthday"), Some(Command::AddBirthday));
        assert_eq!(Command::parse("show-birthday"), Some(Command::ShowBirthday));
        assert_eq!(Command::parse("birthdays"), Some(Command::Birthdays));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Command::parse("Add"), None);
        assert_eq!(Command::parse("EXIT"), None);
        assert_eq!(Command::parse("delete"), None);
    }

    #[test]
    fn test_parse_input_tokenizes_on_whitespace() {
        let (keyword, args) = parse_input("  add   Alice\t1234567890 \n").unwrap();
        assert_eq!(keyword, "add");
        assert_eq!(args, vec!["Alice", "1234567890"]);

        assert!(parse_input("").is_none());
        assert!(parse_input("   \n").is_none());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Ok("Contact added.".to_string())), "Contact added.");
        assert_eq!(
            normalize(Err(CommandError::ContactNotFound("Zed".to_string()))),
            "Contact not found."
        );
        assert_eq!(
            normalize(Err(ValidationError::InvalidBirthday("x".to_string()).into())),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            normalize(Err(CommandError::Arity {
                usage: "phone <name>"
            })),
            "Not enough arguments. Usage: phone <name>"
        );
    }
}

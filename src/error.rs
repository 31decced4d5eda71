//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can fail with.
///
/// Every variant's `Display` text is the message shown to the user; see
/// [`crate::commands::normalize`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number or date failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Fewer arguments than the command needs
    #[error("Not enough arguments. Usage: {usage}")]
    Arity { usage: &'static str },

    /// No contact is stored under the given name
    #[error("Contact not found.")]
    ContactNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

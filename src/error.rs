//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Per-command errors display as the exact
//! message shown to the operator.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Malformed name, phone or birthday
    #[error("{0}")]
    Validation(String),

    /// Referenced contact does not exist
    #[error("Контакт з іменем {name} не знайдено.")]
    NotFound { name: String },

    /// Command was given too few arguments
    #[error("{0}")]
    MissingArguments(&'static str),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted address book could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Create a "not found" error for a contact name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactsResult<T> = Result<T, ContactsError>;

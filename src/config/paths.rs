//! Path management for the contact book
//!
//! The address book lives in a single JSON file in the working directory.

use std::path::PathBuf;

use crate::error::ContactsError;

/// File name of the persisted address book
pub const BOOK_FILE_NAME: &str = "addressbook.json";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Directory holding the address book file
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create paths rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ContactsError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ContactsError::Io(format!("Failed to resolve working directory: {}", e))
        })?;
        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to addressbook.json
    pub fn book_file(&self) -> PathBuf {
        self.base_dir.join(BOOK_FILE_NAME)
    }
}

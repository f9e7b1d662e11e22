//! Address book persistence
//!
//! The whole book is stored as one JSON snapshot in addressbook.json.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContactsError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Serializable address book snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    /// Records in insertion order
    #[serde(default)]
    records: Vec<Record>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Save the entire address book, overwriting the file
pub fn save_book<P: AsRef<Path>>(book: &AddressBook, path: P) -> Result<(), ContactsError> {
    let path = path.as_ref();
    let data = BookData {
        schema_version: SCHEMA_VERSION,
        records: book.records().cloned().collect(),
    };

    write_json_atomic(path, &data)?;
    tracing::info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}

/// Load the address book
///
/// A missing file yields an empty book. Any other failure is an error.
pub fn load_book<P: AsRef<Path>>(path: P) -> Result<AddressBook, ContactsError> {
    let path = path.as_ref();

    let Some(data) = read_json::<BookData, _>(path)? else {
        tracing::info!(path = %path.display(), "no address book found, starting empty");
        return Ok(AddressBook::new());
    };

    if data.schema_version != SCHEMA_VERSION {
        return Err(ContactsError::Storage(format!(
            "Unsupported schema version {} in {} (expected {})",
            data.schema_version,
            path.display(),
            SCHEMA_VERSION
        )));
    }

    let book = AddressBook::from_records(data.records);
    tracing::info!(path = %path.display(), records = book.len(), "address book loaded");
    Ok(book)
}

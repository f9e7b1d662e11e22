//! Core data models for the contact book
//!
//! Validated value types (name, phone, birthday), the contact record and the
//! address book that owns all records.

pub mod address_book;
pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, DEFAULT_UPCOMING_DAYS};
pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;
pub use record::Record;

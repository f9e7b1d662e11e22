//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes. The address book is loaded
//! once at startup and saved once on exit.

pub mod book;
pub mod file_io;

pub use book::{load_book, save_book};
pub use file_io::{read_json, write_json_atomic};

//! contact-book - Terminal address book with birthday reminders
//!
//! This library provides the core of the `contacts` command: validated
//! contact values, the in-memory address book and its JSON persistence, plus
//! the command handlers the interactive prompt drives.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Name, phone, birthday, record and address book
//! - `storage`: JSON file storage layer
//! - `cli`: Command parsing, handlers and the read-eval-print loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::cli::Session;
//! use contact_book::config::ContactPaths;
//! use contact_book::storage::{load_book, save_book};
//!
//! let paths = ContactPaths::new()?;
//! let mut book = load_book(paths.book_file())?;
//! Session::new(&mut book).run(std::io::stdin().lock(), std::io::stdout())?;
//! save_book(&book, paths.book_file())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ContactsError, ContactsResult};

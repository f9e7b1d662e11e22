//! Configuration module for the contact book
//!
//! Resolves where the address book is persisted.

pub mod paths;

pub use paths::ContactPaths;

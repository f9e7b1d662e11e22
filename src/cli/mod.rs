//! Interactive command layer
//!
//! Parses operator input, dispatches it to the handlers and drives the
//! read-eval-print loop over the address book.

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::{parse_input, Command};
pub use handlers::execute;
pub use session::{Session, SessionEnd};

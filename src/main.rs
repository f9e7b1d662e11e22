use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contact_book::cli::{Session, SessionEnd};
use contact_book::config::ContactPaths;
use contact_book::storage::{load_book, save_book};

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal address book with birthday reminders",
    long_about = "An interactive address book. Type commands at the prompt: \
                  add, change, phone, all, add-birthday, show-birthday, \
                  birthdays, hello, exit/close. Contacts are kept in \
                  addressbook.json in the current directory."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // stderr only so the prompt on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = ContactPaths::new()?;
    let book_file = paths.book_file();

    let mut book = load_book(&book_file)
        .with_context(|| format!("Could not load address book from {}", book_file.display()))?;

    let outcome = Session::new(&mut book).run(std::io::stdin().lock(), std::io::stdout());
    match &outcome {
        Ok(SessionEnd::EndOfInput) => {
            tracing::info!("input closed, saving as if `close` was typed")
        }
        Ok(SessionEnd::Exit) => {}
        Err(err) => tracing::error!(error = %err, "terminal I/O failed, saving before exit"),
    }

    save_book(&book, &book_file)
        .with_context(|| format!("Could not save address book to {}", book_file.display()))?;

    outcome?;
    Ok(())
}

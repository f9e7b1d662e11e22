//! Command handlers
//!
//! One function per command. Each validates its arguments and the referenced
//! contact before touching the book, and returns either the message to show
//! or an error whose text is the message to show.

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Record, DEFAULT_UPCOMING_DAYS};

use super::commands::Command;

pub const GREETING: &str = "Чим я можу допомогти?";
pub const FAREWELL: &str = "До побачення!";
pub const UNKNOWN_COMMAND: &str = "Неправильна команда.";
pub const CONTACT_ADDED: &str = "Контакт додано.";
pub const CONTACT_UPDATED: &str = "Контакт оновлено.";
pub const BOOK_EMPTY: &str = "Адресна книга порожня.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "Немає днів народження на наступному тижні.";

const NEED_NAME_AND_PHONE: &str = "Будь ласка, вкажіть ім'я та телефон.";
const NEED_NAME_AND_PHONES: &str = "Будь ласка, вкажіть ім'я, старий і новий телефон.";
const NEED_NAME: &str = "Будь ласка, вкажіть ім'я.";
const NEED_NAME_AND_BIRTHDAY: &str = "Будь ласка, вкажіть ім'я та дату народження.";

/// Run a parsed command against the book
pub fn execute(command: Command, args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    match command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => show_all(book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => birthdays(book),
        Command::Exit => Ok(FAREWELL.to_string()),
        Command::Unknown => Ok(UNKNOWN_COMMAND.to_string()),
    }
}

/// Take the first `N` arguments, ignoring any extras
fn require<'a, const N: usize>(
    args: &[&'a str],
    prompt: &'static str,
) -> ContactsResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(ContactsError::MissingArguments(prompt))
}

fn find_record<'b>(book: &'b AddressBook, name: &str) -> ContactsResult<&'b Record> {
    book.find(name).ok_or_else(|| ContactsError::not_found(name))
}

fn find_record_mut<'b>(book: &'b mut AddressBook, name: &str) -> ContactsResult<&'b mut Record> {
    book.find_mut(name).ok_or_else(|| ContactsError::not_found(name))
}

/// `add <name> <phone>`: create the contact if needed and append the phone
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, phone] = require::<2>(args, NEED_NAME_AND_PHONE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        tracing::debug!(name, "phone appended to existing contact");
        return Ok(CONTACT_UPDATED.to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    tracing::debug!(name, "contact created");
    Ok(CONTACT_ADDED.to_string())
}

/// `change <name> <old> <new>`: replace a phone number
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, old, new] = require::<3>(args, NEED_NAME_AND_PHONES)?;

    find_record_mut(book, name)?.edit_phone(old, new)?;
    Ok(format!("Телефонний номер для {} змінено.", name))
}

/// `phone <name>`: list a contact's phones
pub fn show_phone(args: &[&str], book: &AddressBook) -> ContactsResult<String> {
    let [name] = require::<1>(args, NEED_NAME)?;

    Ok(find_record(book, name)?.phones_joined(", "))
}

/// `all`: every contact, one per line
pub fn show_all(book: &AddressBook) -> ContactsResult<String> {
    if book.is_empty() {
        return Ok(BOOK_EMPTY.to_string());
    }

    Ok(book
        .records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set a contact's birthday
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, birthday] = require::<2>(args, NEED_NAME_AND_BIRTHDAY)?;

    find_record_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("День народження для {} додано.", name))
}

/// `show-birthday <name>`: show a contact's birthday
pub fn show_birthday(args: &[&str], book: &AddressBook) -> ContactsResult<String> {
    let [name] = require::<1>(args, NEED_NAME)?;

    match find_record(book, name)?.birthday() {
        Some(birthday) => Ok(format!("День народження {}: {}.", name, birthday)),
        None => Ok(format!(
            "Інформація про день народження для {} відсутня.",
            name
        )),
    }
}

/// `birthdays`: contacts with a birthday in the coming week
pub fn birthdays(book: &AddressBook) -> ContactsResult<String> {
    let upcoming = book.get_upcoming_birthdays(DEFAULT_UPCOMING_DAYS);
    if upcoming.is_empty() {
        return Ok(NO_UPCOMING_BIRTHDAYS.to_string());
    }
    Ok(upcoming.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Local};

    fn run(line: &str, book: &mut AddressBook) -> String {
        let (command, args) = crate::cli::commands::parse_input(line).unwrap();
        match execute(command, &args, book) {
            Ok(message) => message,
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_add_new_contact() {
        let mut book = AddressBook::new();
        assert_eq!(run("add Alice 0501234567", &mut book), "Контакт додано.");

        assert_eq!(book.len(), 1);
        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones().len(), 1);
        assert!(alice.find_phone("0501234567").is_some());
    }

    #[test]
    fn test_add_existing_contact_updates() {
        let mut book = AddressBook::new();
        run("add Alice 0501234567", &mut book);
        assert_eq!(run("add Alice 0509999999", &mut book), "Контакт оновлено.");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("add Bob 12345", &mut book),
            "Номер телефону повинен містити 10 цифр"
        );
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn test_add_missing_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("add Alice", &mut book),
            "Будь ласка, вкажіть ім'я та телефон."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("add Alice 0501234567 extra words", &mut book),
            "Контакт додано."
        );
        assert_eq!(run("phone Alice", &mut book), "0501234567");
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        run("add Alice 0501234567", &mut book);
        run("add Alice 0671112233", &mut book);

        assert_eq!(
            run("change Alice 0501234567 0939998877", &mut book),
            "Телефонний номер для Alice змінено."
        );
        assert_eq!(run("phone Alice", &mut book), "0671112233, 0939998877");
    }

    #[test]
    fn test_change_errors() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("change Alice 0501234567", &mut book),
            "Будь ласка, вкажіть ім'я, старий і новий телефон."
        );
        assert_eq!(
            run("change Bob 0501234567 0939998877", &mut book),
            "Контакт з іменем Bob не знайдено."
        );

        run("add Alice 0501234567", &mut book);
        assert_eq!(
            run("change Alice 0501234567 nope", &mut book),
            "Номер телефону повинен містити 10 цифр"
        );
        assert_eq!(run("phone Alice", &mut book), "0501234567");
    }

    #[test]
    fn test_phone_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(run("phone Bob", &mut book), "Контакт з іменем Bob не знайдено.");
        assert_eq!(run("phone", &mut book), "Будь ласка, вкажіть ім'я.");
    }

    #[test]
    fn test_all() {
        let mut book = AddressBook::new();
        assert_eq!(run("all", &mut book), "Адресна книга порожня.");

        run("add Alice 0501234567", &mut book);
        run("add Bob 0671112233", &mut book);
        run("add-birthday Bob 01.01.2000", &mut book);
        assert_eq!(
            run("ALL", &mut book),
            "Ім'я контакту: Alice, телефони: 0501234567\n\
             Ім'я контакту: Bob, телефони: 0671112233, День народження: 01.01.2000"
        );
    }

    #[test]
    fn test_birthday_round_trip() {
        let mut book = AddressBook::new();
        run("add Alice 0501234567", &mut book);

        assert_eq!(
            run("show-birthday Alice", &mut book),
            "Інформація про день народження для Alice відсутня."
        );
        assert_eq!(
            run("add-birthday Alice 01.01.2000", &mut book),
            "День народження для Alice додано."
        );
        assert_eq!(
            run("show-birthday Alice", &mut book),
            "День народження Alice: 01.01.2000."
        );
    }

    #[test]
    fn test_birthday_errors() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("add-birthday Alice", &mut book),
            "Будь ласка, вкажіть ім'я та дату народження."
        );
        assert_eq!(
            run("add-birthday Alice 01.01.2000", &mut book),
            "Контакт з іменем Alice не знайдено."
        );
        assert_eq!(run("show-birthday", &mut book), "Будь ласка, вкажіть ім'я.");

        run("add Alice 0501234567", &mut book);
        assert_eq!(
            run("add-birthday Alice 2000-01-01", &mut book),
            "Неправильний формат дати. Використовуйте DD.MM.YYYY"
        );
    }

    #[test]
    fn test_birthdays_empty_book() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("birthdays", &mut book),
            "Немає днів народження на наступному тижні."
        );
    }

    #[test]
    fn test_birthdays_lists_upcoming() {
        let mut book = AddressBook::new();
        let soon = Local::now().date_naive() + Duration::days(2);
        // Born in a leap year so any day, Feb 29 included, is a valid date
        let birthday = format!("{:02}.{:02}.2000", soon.day(), soon.month());

        run("add Alice 0501234567", &mut book);
        run("add Bob 0671112233", &mut book);
        run(&format!("add-birthday Bob {}", birthday), &mut book);

        assert_eq!(run("birthdays", &mut book), "Bob");
    }

    #[test]
    fn test_fixed_responses() {
        let mut book = AddressBook::new();
        assert_eq!(run("hello", &mut book), "Чим я можу допомогти?");
        assert_eq!(run("HeLLo", &mut book), "Чим я можу допомогти?");
        assert_eq!(run("frobnicate", &mut book), "Неправильна команда.");
        assert_eq!(run("close", &mut book), "До побачення!");
    }
}

//! Contact record model
//!
//! One contact: a name, an ordered list of phones and an optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::name::Name;
use super::phone::Phone;
use crate::error::ContactsResult;

/// A single contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, the record's key in the book
    name: Name,

    /// Phone numbers in the order they were added; duplicates allowed
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> ContactsResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> ContactsResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.value() != phone);
    }

    /// Replace `old` with `new`
    ///
    /// Removes all copies of `old` and appends `new`. When `old` is not present
    /// the new number is still added. The record is left untouched if `new`
    /// fails validation.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<()> {
        let new = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(new);
        Ok(())
    }

    /// Find the first phone equal to `phone`
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Parse and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> ContactsResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Phones joined with the given separator
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ім'я контакту: {}, телефони: {}",
            self.name,
            self.phones_joined("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", День народження: {}", birthday)?;
        }
        Ok(())
    }
}

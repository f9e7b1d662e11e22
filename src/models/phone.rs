//! Phone number value type
//!
//! A phone number is exactly ten ASCII digits, nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactsError, ContactsResult};

/// Required number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Create a validated phone number
    pub fn new(value: impl Into<String>) -> ContactsResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ContactsError::Validation(
                "Номер телефону повинен містити 10 цифр".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Check whether a string is a well-formed phone number
    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the raw digits
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

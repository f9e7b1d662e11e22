//! Contact name
//!
//! The name is the identity key of a record in the address book.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactsError, ContactsResult};

/// A non-empty contact name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a validated name
    pub fn new(value: impl Into<String>) -> ContactsResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ContactsError::Validation(
                "Ім'я не може бути порожнім".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the raw name
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ContactsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.value(), "Alice");
        assert_eq!(name.to_string(), "Alice");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Name::new("").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Ім'я не може бути порожнім");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Name>(r#""""#).is_err());
        let name: Name = serde_json::from_str(r#""Bob""#).unwrap();
        assert_eq!(name.value(), "Bob");
    }
}

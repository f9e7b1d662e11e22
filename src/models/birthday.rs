//! Birthday value type
//!
//! Parsed from `DD.MM.YYYY` and stored as a calendar date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactsError, ContactsResult};

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    pub fn new(value: &str) -> ContactsResult<Self> {
        Self::parse(value).ok_or_else(|| {
            ContactsError::Validation(
                "Неправильний формат дати. Використовуйте DD.MM.YYYY".into(),
            )
        })
    }

    fn parse(value: &str) -> Option<Self> {
        // chrono accepts any number of year digits, the format does not
        let year = value.rsplit('.').next()?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            .map(Self)
    }

    /// Get the stored date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's anniversary in the given year
    ///
    /// Feb 29 falls back to Feb 28 in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).filter(|_| self.is_leap_day()))
    }

    /// The first anniversary falling on or after `today`
    pub fn next_anniversary(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.anniversary_in(today.year()) {
            Some(date) if date >= today => Some(date),
            _ => self.anniversary_in(today.year() + 1),
        }
    }

    fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

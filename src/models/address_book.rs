//! Address book model
//!
//! Holds every record keyed by contact name. Iteration follows insertion
//! order; replacing a record keeps its original position.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use super::record::Record;

/// Default window for the upcoming birthdays query
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// All contacts, keyed by name
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Index: name -> position in `records`
    by_name: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records in order; later duplicates replace earlier ones
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().value().to_string();
        match self.by_name.get(&key) {
            Some(&index) => self.records[index] = record,
            None => {
                self.by_name.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    /// Look up a record by exact name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.by_name.get(name) {
            Some(&index) => self.records.get_mut(index),
            None => None,
        }
    }

    /// Remove a record; returns whether one was removed
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(index) = self.by_name.remove(name) else {
            return false;
        };
        self.records.remove(index);
        for position in self.by_name.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        true
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of contacts whose birthday falls within `days` days from today
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<String> {
        let today = chrono::Local::now().date_naive();
        self.upcoming_birthdays_from(today, days)
    }

    /// Names of contacts whose next birthday is in `[today, today + days)`
    ///
    /// Birthdays that already passed this year are checked against next
    /// year's date. Feb 29 birthdays count on Feb 28 in common years.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<String> {
        let end = today
            .checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.next_anniversary(today))
                    .is_some_and(|date| date >= today && date < end)
            })
            .map(|record| record.name().value().to_string())
            .collect()
    }
}

//! Name-keyed store of contact records.
//!
//! This module provides the single owning container for every [`Record`]
//! the assistant knows about, plus the upcoming-birthday query.

use crate::clock::{Clock, SystemClock};
use crate::models::Record;
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;
use tracing::debug;

/// Default look-ahead for [`AddressBook::get_upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// The address book: a mapping from contact name to [`Record`].
///
/// Names are unique keys. Records are iterated in the order their names
/// were first inserted; overwriting a record keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// If a record with the same name already exists, it will be replaced.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        debug!(contact = %key, "storing record");
        self.records.insert(key, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            self.order.retain(|key| key != name);
            debug!(contact = %name, "deleted record");
        }
        removed
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose next birthday falls within `window_days` of the local time.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<&Record> {
        self.upcoming_birthdays_at(SystemClock.now(), window_days)
    }

    /// Records whose next birthday falls in `[now, now + window_days]`.
    ///
    /// Each birthday is placed at midnight of its next occurrence that is
    /// not before `now` (see [`crate::domain::Birthday::next_occurrence`]),
    /// so the window wraps across the new year. A window reaching past
    /// chrono's last representable moment is capped there.
    pub fn upcoming_birthdays_at(&self, now: NaiveDateTime, window_days: u32) -> Vec<&Record> {
        let end = now
            .checked_add_signed(Duration::days(i64::from(window_days)))
            .unwrap_or(NaiveDateTime::MAX);

        self.records()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.next_occurrence(now))
                    .is_some_and(|next| next <= end)
            })
            .collect()
    }
}

//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, any number of phone numbers, and an optional birthday.
///
/// The name is fixed for the lifetime of the record. Phones keep their
/// insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identity of the record inside the address book
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Birthday, if one has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `raw`, returning how many were removed.
    ///
    /// Removing a number the record doesn't have is not an error.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p != raw);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The replacement goes to the end of the list. Returns `Ok(false)`
    /// without touching the record when `old` isn't present; `new` is only
    /// validated when there is something to replace. A malformed `new`
    /// leaves the record unchanged; the old number is only removed once the
    /// replacement is known to be valid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.phones.iter().position(|p| p == old) else {
            debug!(contact = %self.name, old, "edit_phone: no matching phone");
            return Ok(false);
        };

        let replacement = Phone::new(new)?;
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(true)
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == raw)
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_new_record_is_empty() {
        let r = record("Alice");
        assert_eq!(r.name().as_str(), "Alice");
        assert!(r.phones().is_empty());
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut r = record("Alice");
        r.add_phone("1111111111").unwrap();
        r.add_phone("1111111111").unwrap();
        assert_eq!(r.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut r = record("Alice");
        let err = r.add_phone("12345").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits.");
        assert!(r.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut r = record("Alice");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();
        r.add_phone("1111111111").unwrap();

        assert_eq!(r.remove_phone("1111111111"), 2);
        assert_eq!(r.phones(), &[Phone::new("2222222222").unwrap()]);
        assert_eq!(r.remove_phone("3333333333"), 0);
    }

    #[test]
    fn test_edit_phone_replaces_and_appends() {
        let mut r = record("Alice");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();

        assert!(r.edit_phone("1111111111", "3333333333").unwrap());
        assert!(r.find_phone("1111111111").is_none());
        assert_eq!(r.to_string(), "Contact name: Alice, phones: 2222222222; 3333333333");
    }

    #[test]
    fn test_edit_phone_missing_old_is_noop() {
        let mut r = record("Alice");
        r.add_phone("1111111111").unwrap();

        assert!(!r.edit_phone("9999999999", "3333333333").unwrap());
        // Not validated either: nothing to replace
        assert!(!r.edit_phone("9999999999", "bad").unwrap());
        assert_eq!(r.phones().len(), 1);
        assert!(r.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut r = record("Alice");
        r.add_phone("1111111111").unwrap();

        assert!(r.edit_phone("1111111111", "12").is_err());
        assert!(r.find_phone("1111111111").is_some());
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut r = record("Alice");
        r.add_birthday("01.01.2000").unwrap();
        r.add_birthday("02.02.2002").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "02.02.2002");

        assert!(r.add_birthday("2002-02-02").is_err());
        assert_eq!(r.birthday().unwrap().to_string(), "02.02.2002");
    }

    #[test]
    fn test_display_without_phones() {
        assert_eq!(record("Bob").to_string(), "Contact name: Bob, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut r = record("Alice");
        r.add_phone("1234567890").unwrap();
        r.add_birthday("05.03.1990").unwrap();

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "phones": ["1234567890"],
                "birthday": "05.03.1990"
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}

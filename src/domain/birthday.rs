//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields ("1.1.2000"); the shape check keeps
// parsing and rendering symmetric.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date entered as `DD.MM.YYYY`.
///
/// The value is stored as a [`NaiveDate`] and rendered back in the same
/// format, so `Birthday::new(s)?.to_string() == s` for every accepted `s`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.03.1990");
/// assert!(Birthday::new("31.04.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the exact shape or does not name a real calendar date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// The stored date, including the year of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// February 29 is observed on February 28 in non-leap years. Returns
    /// `None` only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first occurrence (at midnight) that is not before `now`.
    ///
    /// If this year's occurrence has already passed, next year's is used.
    /// A birthday that falls on today's date has passed once the clock is
    /// past midnight.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let this_year = self.occurrence_in(now.year())?.and_hms_opt(0, 0, 0)?;
        if this_year >= now {
            return Some(this_year);
        }
        self.occurrence_in(now.year() + 1)?.and_hms_opt(0, 0, 0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_birthday_round_trip() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.1975"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_non_calendar_dates() {
        assert!(Birthday::new("31.04.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
    }

    #[test]
    fn test_birthday_rejects_malformed_text() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.1.2000").is_err());
        assert!(Birthday::new("2000-01-01").is_err());
        assert!(Birthday::new("01/01/2000").is_err());
        assert!(Birthday::new("01.01.00").is_err());
        assert!(Birthday::new(" 01.01.2000").is_err());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("tomorrow").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_occurrence_in_leap_day() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            birthday.occurrence_in(2025),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
    }

    #[test]
    fn test_next_occurrence_this_year() {
        let birthday = Birthday::new("20.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(at(2026, 10, 16, 12)),
            Some(at(2026, 10, 20, 0))
        );
    }

    #[test]
    fn test_next_occurrence_wraps_to_next_year() {
        let birthday = Birthday::new("02.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(at(2026, 12, 30, 9)),
            Some(at(2027, 1, 2, 0))
        );
    }

    #[test]
    fn test_next_occurrence_today_after_midnight_is_next_year() {
        let birthday = Birthday::new("16.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(at(2026, 10, 16, 8)),
            Some(at(2027, 10, 16, 0))
        );
        assert_eq!(
            birthday.next_occurrence(at(2026, 10, 16, 0)),
            Some(at(2026, 10, 16, 0))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.03.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.03.1990\"");

        let parsed: Birthday = serde_json::from_str("\"05.03.1990\"").unwrap();
        assert_eq!(parsed, birthday);

        let invalid: Result<Birthday, _> = serde_json::from_str("\"1990-03-05\"");
        assert!(invalid.is_err());
    }
}

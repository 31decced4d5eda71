//! Address-book command handlers.
//!
//! Each handler takes the arguments that followed the command keyword and
//! the address book, and returns the reply text or a [`CommandError`].
//! Extra arguments beyond the ones a handler uses are ignored.

use crate::book::AddressBook;
use crate::domain::{ContactName, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDateTime;
use tracing::{debug, info};

const ADD_USAGE: &str = "add <name> [phone]";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

fn not_enough(usage: &'static str) -> CommandError {
    CommandError::Arity { usage }
}

fn not_found(name: &str) -> CommandError {
    CommandError::ContactNotFound(name.to_string())
}

/// `add <name> [phone]`: create the contact if needed and add the phone.
///
/// Nothing is stored when the phone of a new contact is invalid.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, rest @ ..] = args else {
        return Err(not_enough(ADD_USAGE));
    };
    let phone = rest.first().copied();

    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        debug!(contact = %name, "contact updated");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(ContactName::new(*name)?);
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    book.add_record(record);
    info!(contact = %name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`: replace one of a contact's phones.
///
/// Reports success even when the contact has no phone equal to `old_phone`.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new, ..] = args else {
        return Err(not_enough(CHANGE_USAGE));
    };

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    if !record.edit_phone(old, new)? {
        debug!(contact = %name, old = %old, "no phone to replace");
    }
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`: the contact's phones, comma-separated.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(not_enough(PHONE_USAGE));
    };

    let record = book.find(name).ok_or_else(|| not_found(name))?;
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(format!("{}: {}", record.name(), phones.join(",")))
}

/// `all`: every contact, one per line.
pub fn show_all(_args: &[&str], book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(join_lines(book.records()))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(not_enough(ADD_BIRTHDAY_USAGE));
    };

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(not_enough(SHOW_BIRTHDAY_USAGE));
    };

    let record = book.find(name).ok_or_else(|| not_found(name))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}", record.name(), birthday)),
        None => Ok("Birthday not set.".to_string()),
    }
}

/// `birthdays`: contacts whose birthday is within `window_days` of `now`.
pub fn upcoming_birthdays(
    _args: &[&str],
    book: &AddressBook,
    now: NaiveDateTime,
    window_days: u32,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays_at(now, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(join_lines(upcoming))
}

fn join_lines<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

//! Data model for the address book.
//!
//! A [`Record`] aggregates one contact's validated fields; the value objects
//! themselves live in [`crate::domain`].

pub mod record;

pub use record::Record;

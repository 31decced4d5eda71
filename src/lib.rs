//! Contact Assistant - an interactive console bot for a small in-memory contact book.
//!
//! Users type commands at a prompt (`add`, `change`, `phone`, `all`,
//! `add-birthday`, `show-birthday`, `birthdays`, `hello`, `close`/`exit`) and
//! get one line of text back per command. State lives only for the process
//! lifetime.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` container and upcoming-birthday query
//! - **commands**: Command parsing, handlers, and error normalization
//! - **session**: The prompt loop tying input, handlers, and output together
//! - **clock**: Source of the current time for birthday queries
//! - **config**: Configuration from environment variables
//! - **error**: Error types for handlers and configuration

pub mod book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use book::AddressBook;
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{normalize, parse_input, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::Record;
pub use session::{run_session, Reply, Session};

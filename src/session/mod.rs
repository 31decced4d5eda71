//! Interactive session for the contact assistant.
//!
//! A [`Session`] owns the address book and turns one input line into one
//! reply. [`run_session`] drives it as a prompt loop over any reader and
//! writer pair (stdin/stdout in the binary, in-memory buffers in tests).

use crate::book::AddressBook;
use crate::clock::{Clock, SystemClock};
use crate::commands::{self, normalize, parse_input, Command};
use crate::config::Config;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const GREETING: &str = "Welcome to assistance bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// What the session wants done after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

/// The assistant's state for one run: the address book plus settings.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    birthday_window_days: u32,
}

impl Session<SystemClock> {
    /// Create a session over `book` using the system clock.
    pub fn new(book: AddressBook, config: &Config) -> Self {
        Self::with_clock(book, config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Create a session that reads the time from `clock`.
    pub fn with_clock(book: AddressBook, config: &Config, clock: C) -> Self {
        Self {
            book,
            clock,
            birthday_window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((keyword, args)) = parse_input(line) else {
            return Reply::Continue("Invalid command.".to_string());
        };
        let Some(command) = Command::parse(keyword) else {
            debug!(keyword, "unrecognized command");
            return Reply::Continue("Invalid command.".to_string());
        };

        debug!(?command, args = args.len(), "dispatching command");
        let book = &mut self.book;
        let result = match command {
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Hello => return Reply::Continue("How can I help you?".to_string()),
            Command::Add => commands::add_contact(&args, book),
            Command::Change => commands::change_contact(&args, book),
            Command::Phone => commands::show_phone(&args, book),
            Command::All => commands::show_all(&args, book),
            Command::AddBirthday => commands::add_birthday(&args, book),
            Command::ShowBirthday => commands::show_birthday(&args, book),
            Command::Birthdays => commands::upcoming_birthdays(
                &args,
                book,
                self.clock.now(),
                self.birthday_window_days,
            ),
        };
        Reply::Continue(normalize(result))
    }
}

/// Run the prompt loop until `close`/`exit` or end of input.
///
/// The greeting is written first; every reply is written on its own line.
/// End of input is treated like `exit`. Lines that aren't valid UTF-8 are
/// decoded lossily, so a stray byte yields a reply instead of ending the
/// session and losing the address book.
pub fn run_session<C, R, W>(session: &mut Session<C>, mut input: R, output: &mut W) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("end of input, closing session");
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("input line was not valid UTF-8");
        }

        match session.handle_line(&line) {
            Reply::Continue(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
        }
    }

    output.flush()
}

//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so
//! they never mix with the conversation.

use anyhow::Result;
use contact_assistant::{run_session, AddressBook, Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact assistant (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut session = Session::new(AddressBook::new(), &config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut session, stdin.lock(), &mut stdout)?;

    info!(
        "Contact assistant finished with {} contacts in memory",
        session.book().len()
    );
    Ok(())
}

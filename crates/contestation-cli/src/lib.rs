//! Contestation CLI library.
//!
//! Command-line and interactive front end for the petition pipeline:
//! configuration, per-petition sessions, command execution and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{ProcessedPetition, Session, SessionError};

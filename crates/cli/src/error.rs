//! crates/cli/src/error.rs
//! Failures surfaced by the command line front-end.

use std::io;

use logging::SwitchTokenError;
use settings::SettingsError;
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for malformed command lines and switch tokens.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for unreadable, unparsable or unwritable settings files.
pub const EXIT_SETTINGS: i32 = 2;

/// Error produced while running a `switchlog` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// A `set` operand was not a valid switch token.
    #[error("{0}")]
    Token(#[from] SwitchTokenError),
    /// The settings file could not be read, parsed or written.
    #[error("{0}")]
    Settings(#[from] SettingsError),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Token(_) => EXIT_USAGE,
            Self::Settings(_) | Self::Output(_) => EXIT_SETTINGS,
        }
    }
}

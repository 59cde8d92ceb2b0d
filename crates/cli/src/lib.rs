#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `switchlog` command line. It lets an operator inspect
//! the settings file behind the debug switches, flip individual switches or the
//! two facility flags, and run a small simulated host loop that shows which
//! lines the current settings let through.
//!
//! # Design
//!
//! [`run`] is the only entry point. It accepts the argument list together with
//! handles for standard output and error, parses the arguments with a
//! [`clap`](https://docs.rs/clap/) builder definition and dispatches to one of
//! the subcommands:
//!
//! - `list` prints every entry of the settings file as `section/label = value`.
//! - `set COMPONENT.CATEGORY[=on|off]...` sets switches, creating missing ones.
//! - `force-off on|off` and `developer-mode on|off` set the facility flags.
//! - `demo` drives two components through [`logging::DebugTools`] for a
//!   number of simulated frames.
//!
//! Every command takes `--config FILE` (default `switchlog.toml`).
//!
//! # Invariants
//!
//! - `run` never panics; failures become non-zero exit codes with a
//!   diagnostic on the error handle.
//! - `set` validates every token before touching the file, so a bad token
//!   leaves the settings unchanged.
//!
//! # Errors
//!
//! Usage errors and malformed switch tokens exit with [`EXIT_USAGE`];
//! settings files that cannot be read, parsed or written exit with
//! [`EXIT_SETTINGS`].
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["switchlog", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("switchlog "));
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/switchlog.rs` for the binary that wires [`run`] into `main`.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use clap::error::ErrorKind;
use logging::{
    DEVELOPER_MODE_LABEL, DebugTools, FORCE_OFF_LABEL, SettingsFile, SettingsStore, SwitchToken,
    SwitchTokenError, WriterSink, parse_switch_value,
};

mod command;
mod demo;
mod error;

pub use command::DEFAULT_CONFIG_FILE;
pub use error::{CliError, EXIT_SETTINGS, EXIT_SUCCESS, EXIT_USAGE};

use command::{PROGRAM_NAME, Request, parse_args};
use demo::DemoOptions;

#[derive(Clone, Copy, Debug)]
enum FacilityFlag {
    ForceOff,
    DeveloperMode,
}

impl FacilityFlag {
    const fn label(self) -> &'static str {
        match self {
            Self::ForceOff => FORCE_OFF_LABEL,
            Self::DeveloperMode => DEVELOPER_MODE_LABEL,
        }
    }
}

/// Installs the diagnostics subscriber used by the binary.
///
/// Facility events go to stderr, filtered by `RUST_LOG` and defaulting to
/// warnings only so command output stays clean.
#[cfg(feature = "tracing")]
pub fn init_diagnostics() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("switchlog=warn"));
    logging::init_tracing_with_filter(filter);
}

/// Installs the diagnostics subscriber used by the binary. Without the
/// `tracing` feature this does nothing.
#[cfg(not(feature = "tracing"))]
pub fn init_diagnostics() {}

/// Runs the CLI with `arguments` (program name first) and returns the exit
/// code the process should use.
pub fn run<I, T, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let request = match parse_args(args) {
        Ok(request) => request,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    match execute(request, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

fn report_usage<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", error.render());
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{}", error.render());
            EXIT_USAGE
        }
    }
}

fn execute<W: Write>(request: Request, stdout: &mut W) -> Result<(), CliError> {
    match request {
        Request::List { config } => list(&config, stdout),
        Request::Set { config, tokens } => set(&config, &tokens, stdout),
        Request::ForceOff { config, value } => {
            set_flag(&config, FacilityFlag::ForceOff, &value, stdout)
        }
        Request::DeveloperMode { config, value } => {
            set_flag(&config, FacilityFlag::DeveloperMode, &value, stdout)
        }
        Request::Demo {
            config,
            frames,
            frame_ms,
            per_category,
        } => demo::run_demo(
            &config,
            DemoOptions {
                frames,
                frame_ms,
                per_category,
            },
            stdout,
        ),
    }
}

/// Opens the facility on `config` without printing any gated output.
fn open_tools(config: &Path) -> Result<DebugTools, CliError> {
    Ok(DebugTools::open(config, Arc::new(WriterSink::new(io::sink())))?)
}

fn list<W: Write>(config: &Path, stdout: &mut W) -> Result<(), CliError> {
    let store = SettingsFile::open(config)?;
    for entry in store.entries() {
        writeln!(stdout, "{} = {}", entry.definition, entry.value)?;
    }
    Ok(())
}

fn set<W: Write>(config: &Path, tokens: &[String], stdout: &mut W) -> Result<(), CliError> {
    let tokens = tokens
        .iter()
        .map(|token| token.parse::<SwitchToken>())
        .collect::<Result<Vec<_>, _>>()?;

    let tools = open_tools(config)?;
    for token in &tokens {
        tools.set_switch(&token.key, token.value)?;
        writeln!(stdout, "{} = {}", token.key.definition(), token.value)?;
    }
    Ok(())
}

fn set_flag<W: Write>(
    config: &Path,
    flag: FacilityFlag,
    value: &str,
    stdout: &mut W,
) -> Result<(), CliError> {
    let enabled = parse_switch_value(value).ok_or_else(|| SwitchTokenError::InvalidValue {
        key: flag.label().to_owned(),
        value: value.to_owned(),
    })?;

    let tools = open_tools(config)?;
    match flag {
        FacilityFlag::ForceOff => tools.set_force_off(enabled)?,
        FacilityFlag::DeveloperMode => tools.set_developer_mode(enabled)?,
    }
    writeln!(stdout, "{}/{} = {enabled}", tools.config().section, flag.label())?;
    Ok(())
}

#[cfg(test)]
mod tests;

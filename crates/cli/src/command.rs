//! crates/cli/src/command.rs
//! clap definition of the `switchlog` command line.

use std::path::PathBuf;

use clap::builder::{PathBufValueParser, PossibleValuesParser};
use clap::{Arg, ArgAction, Command, value_parser};

/// Spellings accepted for on/off operands.
const TOGGLE_VALUES: [&str; 6] = ["on", "off", "true", "false", "1", "0"];

pub(crate) const PROGRAM_NAME: &str = "switchlog";

/// Default settings file used when `--config` is omitted.
pub const DEFAULT_CONFIG_FILE: &str = "switchlog.toml";

/// What the user asked for, extracted from clap's matches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Request {
    List {
        config: PathBuf,
    },
    Set {
        config: PathBuf,
        tokens: Vec<String>,
    },
    ForceOff {
        config: PathBuf,
        value: String,
    },
    DeveloperMode {
        config: PathBuf,
        value: String,
    },
    Demo {
        config: PathBuf,
        frames: u64,
        frame_ms: u64,
        per_category: bool,
    },
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .help("Settings file holding the debug switches.")
        .num_args(1)
        .action(ArgAction::Set)
        .default_value(DEFAULT_CONFIG_FILE)
        .value_parser(PathBufValueParser::new())
}

fn toggle_arg(help: &'static str) -> Arg {
    Arg::new("value")
        .value_name("on|off")
        .help(help)
        .required(true)
        .value_parser(PossibleValuesParser::new(TOGGLE_VALUES))
}

pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit per-component debug switches.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("Print every persisted entry as `section/label = value`.")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("set")
                .about("Set category switches, creating them when missing.")
                .arg(config_arg())
                .arg(
                    Arg::new("tokens")
                        .value_name("COMPONENT.CATEGORY[=on|off]")
                        .help("Switch to set; a bare key turns the switch on.")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("force-off")
                .about("Set the global kill-switch that suppresses all debug lines.")
                .arg(config_arg())
                .arg(toggle_arg("New value of `Force Debug Logging Off`.")),
        )
        .subcommand(
            Command::new("developer-mode")
                .about("Set whether newly seen categories default to on.")
                .arg(config_arg())
                .arg(toggle_arg("New value of `Developer Mode`.")),
        )
        .subcommand(
            Command::new("demo")
                .about("Run a simulated host loop with two components logging every frame.")
                .arg(config_arg())
                .arg(
                    Arg::new("frames")
                        .long("frames")
                        .value_name("N")
                        .help("Number of frames to simulate.")
                        .default_value("30")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("frame-ms")
                        .long("frame-ms")
                        .value_name("MS")
                        .help("Simulated duration of one frame in milliseconds.")
                        .default_value("100")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("per-category")
                        .long("per-category")
                        .help("Give every category its own pacing cooldown.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses `args` (including the program name) into a [`Request`].
pub(crate) fn parse_args<I, T>(args: I) -> Result<Request, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(args)?;
    let Some((name, mut sub)) = matches.remove_subcommand() else {
        return Err(clap_command().error(
            clap::error::ErrorKind::MissingSubcommand,
            "a subcommand is required",
        ));
    };

    let config = sub
        .remove_one::<PathBuf>("config")
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let request = match name.as_str() {
        "list" => Request::List { config },
        "set" => Request::Set {
            config,
            tokens: sub
                .remove_many::<String>("tokens")
                .map(Iterator::collect)
                .unwrap_or_default(),
        },
        "force-off" => Request::ForceOff {
            config,
            value: sub.remove_one::<String>("value").unwrap_or_default(),
        },
        "developer-mode" => Request::DeveloperMode {
            config,
            value: sub.remove_one::<String>("value").unwrap_or_default(),
        },
        "demo" => Request::Demo {
            config,
            frames: sub.remove_one::<u64>("frames").unwrap_or(30),
            frame_ms: sub.remove_one::<u64>("frame-ms").unwrap_or(100),
            per_category: sub.get_flag("per-category"),
        },
        other => {
            return Err(clap_command().error(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unrecognised subcommand '{other}'"),
            ));
        }
    };
    Ok(request)
}

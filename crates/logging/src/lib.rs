#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the central debug-logging gate shared by independent client
//! components. Each component logs in free-form *categories*; the first time a
//! (component, category) pair is seen, a persisted on/off switch is created for
//! it, so operators can enable exactly the output they need by editing the
//! settings file.
//!
//! # Design
//!
//! - [`DebugTools`] owns the settings store, the [`SwitchRegistry`] and the
//!   pacing clocks behind one mutex and writes allowed lines to a
//!   [`LogSink`].
//! - Components obtain a [`ComponentLogger`] once via
//!   [`DebugTools::register`] and log through [`debug_log!`] and
//!   [`paced_log!`], which record the calling function at compile time.
//! - [`DebugTools::dump_object`] prints one line per field of any type that
//!   implements [`Describe`]; it is not gated.
//!
//! # Invariants
//!
//! - A switch is created at most once per key and never removed.
//! - The global kill-switch (`Force Debug Logging Off`, on by default) vetoes
//!   every gated line, but switches are still created while it is on.
//! - Developer mode only chooses the default of switches created while it is
//!   on; existing switches keep their value.
//! - A pacing clock only moves forward and returns to zero right after a
//!   paced line is written.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use logging::{CaptureSink, DebugTools, SettingsFile, debug_log, paced_log};
//!
//! let sink = Arc::new(CaptureSink::new());
//! let tools = Arc::new(DebugTools::new(SettingsFile::in_memory(), sink.clone()));
//! tools.set_force_off(false).unwrap();
//!
//! let net = tools.register("net_client");
//! debug_log!(net, "Sockets", "hidden: switch defaults to off");
//! assert!(sink.is_empty());
//!
//! tools.set_developer_mode(true).unwrap();
//! paced_log!(net, "Frames", "shown: new switches default to on");
//! tools.tick(Duration::from_millis(16));
//! paced_log!(net, "Frames", "hidden: cooling down");
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! # See also
//!
//! - [`settings`] for the persisted store and its TOML layout.
//! - [`logging_sink`] for the available sinks.

mod config;
mod dump;
mod gate;
pub mod identity;
mod logger;
mod macros;
mod pacing;
mod registry;
mod timer;
mod tools;

pub use config::{
    DEFAULT_SECTION, DEVELOPER_MODE_DESCRIPTION, DEVELOPER_MODE_LABEL, DebugToolsConfig,
    FORCE_OFF_DESCRIPTION, FORCE_OFF_LABEL, SwitchToken, SwitchTokenError, category_description,
    category_label, component_section, parse_category_label, parse_component_section,
    parse_switch_value,
};
pub use dump::{Debugged, Describe, Field, FieldValue, ValueKind, render_dump, short_type_name};
pub use identity::{CallSite, ComponentId};
pub use logger::ComponentLogger;
pub use pacing::{DEFAULT_PACE, Pacer, PacingClock, PacingMode};
pub use registry::{Resolution, SwitchKey, SwitchRegistry};
pub use timer::FrameTimer;
pub use tools::DebugTools;

pub use logging_sink::{CaptureSink, Level, LineMode, LogSink, Record, WriterSink};
#[cfg(feature = "tracing")]
pub use logging_sink::{TracingSink, init_tracing, init_tracing_with_filter};
pub use settings::{SettingsError, SettingsFile, SettingsStore};

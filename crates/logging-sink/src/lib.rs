#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines where switchlog's formatted lines end up. The gate in
//! the `logging` crate decides *whether* a line is written and *what* it says;
//! a [`LogSink`] only receives the finished line together with its [`Level`].
//!
//! # Design
//!
//! [`LogSink::write`] takes `&self` so one sink can be shared by every
//! component behind an `Arc`. Implementations synchronise internally:
//!
//! - [`WriterSink`] renders lines into any [`std::io::Write`] target, one line
//!   per record by default (see [`LineMode`]).
//! - [`CaptureSink`] buffers [`Record`]s in memory for tests and tooling that
//!   wants to inspect output after the fact.
//! - `TracingSink` (feature `tracing`) forwards each line as a `tracing` event
//!   so hosts that already run a subscriber get switchlog output for free.
//!
//! # Invariants
//!
//! - A sink never fails the caller. Write errors are reported as a `tracing`
//!   debug event and otherwise dropped, because the gate's entry points are
//!   infallible.
//! - Every record is written whole; lines from concurrent callers never
//!   interleave within one sink.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CaptureSink, Level, LogSink};
//!
//! let sink = CaptureSink::new();
//! sink.write(Level::Warning, "config is null");
//!
//! let records = sink.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].level, Level::Warning);
//! assert_eq!(records[0].line, "config is null");
//! ```

mod level;
mod line_mode;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use level::Level;
pub use line_mode::LineMode;
pub use sink::{CaptureSink, LogSink, Record, WriterSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, TracingSink, init_tracing, init_tracing_with_filter};

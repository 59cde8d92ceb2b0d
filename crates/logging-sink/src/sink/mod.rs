//! crates/logging-sink/src/sink/mod.rs
//! The sink trait and its in-crate implementations.

use std::sync::Arc;

use crate::Level;

mod capture;
mod writer;

pub use capture::{CaptureSink, Record};
pub use writer::WriterSink;

/// Destination for finished log lines.
///
/// Implementations must be shareable between threads and must not fail the
/// caller; see the crate documentation for the error policy.
pub trait LogSink: Send + Sync {
    /// Writes one line at `level`.
    fn write(&self, level: Level, line: &str);

    /// Writes one line at [`Level::Info`].
    fn info(&self, line: &str) {
        self.write(Level::Info, line);
    }

    /// Writes one line at [`Level::Warning`].
    fn warning(&self, line: &str) {
        self.write(Level::Warning, line);
    }

    /// Writes one line at [`Level::Error`].
    fn error(&self, line: &str) {
        self.write(Level::Error, line);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line);
    }
}

use std::sync::{Mutex, PoisonError};

use super::LogSink;
use crate::Level;

/// One line received by a [`CaptureSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Level the line was written at.
    pub level: Level,
    /// The line itself, without a trailing newline.
    pub line: String,
}

/// Sink that keeps every record in memory until drained.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Record>>,
}

impl CaptureSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all collected records, oldest first.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    /// Returns a copy of all collected records without clearing them.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Returns the collected lines without clearing them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.line.clone()).collect()
    }

    /// Returns the number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no records have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for CaptureSink {
    fn write(&self, level: Level, line: &str) {
        self.lock().push(Record {
            level,
            line: line.to_owned(),
        });
    }
}

//! crates/logging-sink/src/level.rs
//! Severity attached to each sink line.

use std::fmt;

/// Severity of a line handed to a [`LogSink`](crate::LogSink).
///
/// switchlog is not a leveled logging framework; these three levels exist only
/// so sinks can pass them through to whatever the host uses.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    /// Regular diagnostic output, including every gated debug line.
    Info,
    /// Recoverable problems such as a missing object in a null check.
    Warning,
    /// Operations that could not be carried out.
    Error,
}

impl Level {
    /// Returns the label used when rendering the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Level::Info.as_str(), "Info");
        assert_eq!(Level::Warning.as_str(), "Warning");
        assert_eq!(Level::Error.as_str(), "Error");
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:<7}", Level::Info), "Info   ");
        assert_eq!(format!("{:<7}", Level::Warning), "Warning");
    }
}

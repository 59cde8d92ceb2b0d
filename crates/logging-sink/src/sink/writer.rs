use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::LogSink;
use crate::{Level, LineMode};

/// Source label rendered when none is configured.
pub const DEFAULT_SOURCE: &str = "switchlog";

/// Sink that renders lines into an [`io::Write`] target.
///
/// Each record is rendered as `[<level>:<source>] <line>`, the level padded to
/// seven columns so consecutive lines align:
///
/// ```
/// use logging_sink::{Level, LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new()).with_source("demo");
/// sink.write(Level::Info, "[Net|demo::connect]: handshake done");
/// sink.write(Level::Warning, "socket is null");
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "[Info   :demo] [Net|demo::connect]: handshake done\n[Warning:demo] socket is null\n"
/// );
/// ```
pub struct WriterSink<W> {
    state: Mutex<WriterState<W>>,
}

struct WriterState<W> {
    writer: W,
    line_mode: LineMode,
    source: String,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(WriterState {
                writer,
                line_mode,
                source: DEFAULT_SOURCE.to_owned(),
            }),
        }
    }

    /// Replaces the source label rendered in front of each line.
    #[must_use]
    pub fn with_source(self, source: impl Into<String>) -> Self {
        let mut state = self.into_state();
        state.source = source.into();
        Self {
            state: Mutex::new(state),
        }
    }

    /// Returns the current [`LineMode`].
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Runs `f` with exclusive access to the wrapped writer, for example to
    /// move buffered output elsewhere while the sink is shared.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock().writer)
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.into_state().writer
    }

    fn into_state(self) -> WriterState<W> {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> WriterState<W> {
    fn render(&mut self, level: Level, line: &str) -> io::Result<()> {
        write!(self.writer, "[{level:<7}:{}] {line}", self.source)?;
        self.writer.write_all(self.line_mode.terminator())?;
        self.writer.flush()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write(&self, level: Level, line: &str) {
        if let Err(error) = self.lock().render(level, line) {
            tracing::debug!(target: "switchlog::sink", %error, "dropped log line");
        }
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("WriterSink")
            .field("line_mode", &state.line_mode)
            .field("source", &state.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_used() {
        let sink = WriterSink::new(Vec::new());
        sink.write(Level::Error, "Can't debug null object");
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[Error  :switchlog] Can't debug null object\n");
    }

    #[test]
    fn without_newline_concatenates() {
        let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(Level::Info, "a");
        sink.write(Level::Info, "b");
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[Info   :switchlog] a[Info   :switchlog] b");
    }

    #[test]
    fn line_mode_can_change_between_writes() {
        let sink = WriterSink::new(Vec::new());
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.write(Level::Info, "x");
        assert!(!String::from_utf8(sink.into_inner()).unwrap().ends_with('\n'));
    }

    #[test]
    fn with_writer_drains_while_shared() {
        let sink = WriterSink::new(Vec::new());
        sink.write(Level::Info, "first");
        let taken = sink.with_writer(std::mem::take);
        sink.write(Level::Info, "second");

        assert_eq!(String::from_utf8(taken).unwrap(), "[Info   :switchlog] first\n");
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "[Info   :switchlog] second\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_do_not_reach_the_caller() {
        let sink = WriterSink::new(FailingWriter);
        sink.write(Level::Info, "lost");
    }

    #[test]
    fn debug_output_names_source() {
        let sink = WriterSink::new(Vec::<u8>::new()).with_source("host");
        let rendered = format!("{sink:?}");
        assert!(rendered.contains("WriterSink"));
        assert!(rendered.contains("host"));
    }
}

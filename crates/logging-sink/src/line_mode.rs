//! crates/logging-sink/src/line_mode.rs

/// How a [`WriterSink`](crate::WriterSink) terminates each rendered line.
///
/// Hosts that already frame their console output (an in-game overlay, a
/// line-buffered widget) use [`LineMode::WithoutNewline`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Every line ends with `\n`.
    #[default]
    WithNewline,
    /// Lines are written back to back; the host adds its own separators.
    WithoutNewline,
}

impl LineMode {
    /// Bytes written after each line.
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::WithNewline.terminator(), b"\n");
    /// assert!(LineMode::WithoutNewline.terminator().is_empty());
    /// ```
    #[must_use]
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::WithNewline => b"\n",
            Self::WithoutNewline => b"",
        }
    }
}

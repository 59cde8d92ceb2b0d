//! crates/logging-sink/src/tracing_bridge.rs
//! Bridge between switchlog's sink seam and the tracing crate.
//!
//! [`TracingSink`] turns every sink line into a `tracing` event so the host's
//! subscriber decides formatting and destination. [`init_tracing`] installs a
//! `tracing-subscriber` fmt subscriber for hosts that do not have one yet.
//!
//! ```rust,ignore
//! use logging_sink::{TracingSink, init_tracing};
//!
//! init_tracing();
//! let sink = TracingSink::new();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{Level, LogSink};

/// Target attached to events emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "switchlog";

/// Default filter directive used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "switchlog=info";

/// Sink that re-emits lines as `tracing` events with target `switchlog`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Info => tracing::info!(target: TRACING_TARGET, "{line}"),
            Level::Warning => tracing::warn!(target: TRACING_TARGET, "{line}"),
            Level::Error => tracing::error!(target: TRACING_TARGET, "{line}"),
        }
    }
}

/// Installs a global fmt subscriber, writing to stderr, filtered by `RUST_LOG`.
///
/// Falls back to `switchlog=info` when the variable is unset or invalid. Does
/// nothing if a global subscriber is already installed.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    init_tracing_with_filter(filter);
}

/// Installs a global fmt subscriber writing to stderr behind a caller-supplied
/// filter layer.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

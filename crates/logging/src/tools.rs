//! crates/logging/src/tools.rs
//! The shared facility every component logs through.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use logging_sink::{Level, LogSink};
use settings::{SettingsError, SettingsFile, SettingsStore};

use crate::config::DebugToolsConfig;
use crate::dump::{Describe, render_dump};
use crate::gate::Gate;
use crate::identity::{CallSite, ComponentId};
use crate::logger::ComponentLogger;
use crate::pacing::{Pacer, PacingClock};
use crate::registry::SwitchKey;

struct State<S> {
    gate: Gate<S>,
    pacer: Pacer,
}

/// Central gate shared by every client component.
///
/// Owns the settings store, the switch registry and the pacing clocks behind
/// one mutex, so the lookup, creation and persistence of a switch happen as a
/// single step even with concurrent callers. Formatting and sink writes run
/// outside the lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{CaptureSink, DebugTools, SettingsFile, debug_log};
///
/// let sink = Arc::new(CaptureSink::new());
/// let tools = Arc::new(DebugTools::new(SettingsFile::in_memory(), sink.clone()));
/// tools.set_force_off(false).unwrap();
/// tools.set_developer_mode(true).unwrap();
///
/// let net = tools.register("net_client");
/// debug_log!(net, "Sockets", "connected to {}", "10.0.0.1");
///
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.lines()[0].starts_with("[Sockets|"));
/// assert!(sink.lines()[0].ends_with("]: connected to 10.0.0.1"));
/// ```
pub struct DebugTools<S = SettingsFile> {
    state: Mutex<State<S>>,
    sink: Arc<dyn LogSink>,
    config: DebugToolsConfig,
}

impl DebugTools<SettingsFile> {
    /// Opens the settings file at `path` and builds the facility on it with
    /// the default configuration.
    pub fn open(path: impl Into<PathBuf>, sink: Arc<dyn LogSink>) -> Result<Self, SettingsError> {
        Ok(Self::new(SettingsFile::open(path)?, sink))
    }
}

impl<S: SettingsStore> DebugTools<S> {
    /// Builds the facility with the default configuration.
    pub fn new(store: S, sink: Arc<dyn LogSink>) -> Self {
        Self::with_config(store, sink, DebugToolsConfig::default())
    }

    /// Builds the facility, binding its own flags in `config.section` and
    /// adopting every switch already present in `store`.
    pub fn with_config(store: S, sink: Arc<dyn LogSink>, config: DebugToolsConfig) -> Self {
        let gate = Gate::new(store, &config.section);
        let pacer = Pacer::new(config.pacing);
        Self {
            state: Mutex::new(State { gate, pacer }),
            sink,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DebugToolsConfig {
        &self.config
    }

    /// Returns the sink lines are written to.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Hands out the logger `component` uses for every call.
    pub fn register(self: &Arc<Self>, component: impl Into<ComponentId>) -> ComponentLogger<S> {
        let component = component.into();
        self.state().gate.register_component(&component);
        ComponentLogger::new(Arc::clone(self), component)
    }

    /// Whether a line in `category` from `component` would be written.
    ///
    /// Creates and persists the switch on first use, even when the global
    /// kill-switch is on.
    pub fn should_emit(&self, component: &ComponentId, category: &str) -> bool {
        self.state().gate.should_emit(component, category)
    }

    /// Writes `[category|caller]: message` when the gate allows it. The
    /// message is only built once the gate has passed.
    pub fn log_with<F>(&self, component: &ComponentId, site: CallSite, category: &str, message: F)
    where
        F: FnOnce() -> String,
    {
        if !self.should_emit(component, category) {
            return;
        }
        self.emit(site, category, &message());
    }

    /// Like [`log_with`](Self::log_with), but also suppressed until `delay`
    /// has passed since the last paced line. Suppressed lines leave the
    /// cooldown running.
    pub fn paced_log_with<F>(
        &self,
        component: &ComponentId,
        site: CallSite,
        category: &str,
        delay: Duration,
        message: F,
    ) where
        F: FnOnce() -> String,
    {
        {
            let mut state = self.state();
            if !state.gate.should_emit(component, category) {
                return;
            }
            let key = SwitchKey::new(component, category);
            if !state.pacer.try_pass(&key, delay) {
                return;
            }
        }
        self.emit(site, category, &message());
    }

    /// Advances the pacing clocks by the host's frame delta.
    pub fn tick(&self, delta: Duration) {
        self.state().pacer.tick(delta);
    }

    /// Time since the last paced line for `key`, `None` if nothing paced has
    /// been written on that clock yet.
    #[must_use]
    pub fn pacing_elapsed(&self, key: &SwitchKey) -> Option<Duration> {
        self.state().pacer.clock(key).and_then(PacingClock::elapsed)
    }

    /// Warns `"{name} is null"` and returns `false` for `None`; otherwise
    /// returns `true`, writing `"{name} is not null"` when `log_if_present`.
    /// Not gated.
    pub fn null_check<T: ?Sized>(&self, object: Option<&T>, name: &str, log_if_present: bool) -> bool {
        if object.is_none() {
            self.sink.warning(&format!("{name} is null"));
            return false;
        }
        if log_if_present {
            self.sink.info(&format!("{name} is not null"));
        }
        true
    }

    /// Writes a one-level dump of `object`. Not gated.
    ///
    /// A `None` object produces the null check warning followed by an error
    /// line instead.
    pub fn dump_object<T: Describe + ?Sized>(&self, object: Option<&T>, name: &str) {
        let Some(object) = object else {
            self.null_check(object, name, false);
            self.sink.error("Can't debug null object");
            return;
        };
        for line in render_dump(object, name) {
            self.sink.info(&line);
        }
    }

    /// Writes `line` at info level, bypassing the gate.
    pub fn info(&self, line: &str) {
        self.sink.info(line);
    }

    /// Writes `line` at warning level, bypassing the gate.
    pub fn warning(&self, line: &str) {
        self.sink.warning(line);
    }

    /// Writes `line` at error level, bypassing the gate.
    pub fn error(&self, line: &str) {
        self.sink.error(line);
    }

    /// Current value of the global kill-switch.
    #[must_use]
    pub fn force_off(&self) -> bool {
        self.state().gate.force_off()
    }

    /// Sets and persists the global kill-switch.
    pub fn set_force_off(&self, value: bool) -> Result<(), SettingsError> {
        self.state().gate.set_force_off(value)
    }

    /// Current value of developer mode.
    #[must_use]
    pub fn developer_mode(&self) -> bool {
        self.state().gate.developer_mode()
    }

    /// Sets and persists developer mode. Only switches created afterwards
    /// pick up the new default.
    pub fn set_developer_mode(&self, value: bool) -> Result<(), SettingsError> {
        self.state().gate.set_developer_mode(value)
    }

    /// Current value of an existing switch.
    #[must_use]
    pub fn switch(&self, key: &SwitchKey) -> Option<bool> {
        self.state().gate.switch(key)
    }

    /// Sets and persists a switch, creating it when unknown.
    pub fn set_switch(&self, key: &SwitchKey, value: bool) -> Result<(), SettingsError> {
        self.state().gate.set_switch(key, value)
    }

    /// Every switch known so far, sorted.
    #[must_use]
    pub fn switch_keys(&self) -> Vec<SwitchKey> {
        self.state().gate.registry().keys()
    }

    /// Components that registered a logger or own a switch, sorted.
    #[must_use]
    pub fn components(&self) -> Vec<ComponentId> {
        self.state().gate.registry().components()
    }

    /// Re-reads the store so operator edits take effect without a restart.
    pub fn reload_settings(&self) -> Result<(), SettingsError> {
        self.state().gate.reload()
    }

    /// Runs `f` with shared access to the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.state().gate.store())
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Switches created through the store directly are only picked up by the
    /// registry on the next [`reload_settings`](Self::reload_settings).
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(self.state().gate.store_mut())
    }

    fn emit(&self, site: CallSite, category: &str, message: &str) {
        self.sink
            .write(Level::Info, &format!("[{category}|{}]: {message}", site.label()));
    }

    fn state(&self) -> MutexGuard<'_, State<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> fmt::Debug for DebugTools<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugTools")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

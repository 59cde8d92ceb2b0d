//! crates/logging/src/logger.rs
//! Per-component handle onto the shared [`DebugTools`].

use std::sync::Arc;
use std::time::Duration;

use settings::{SettingsFile, SettingsStore};

use crate::dump::Describe;
use crate::identity::{CallSite, ComponentId};
use crate::tools::DebugTools;

/// Logger bound to one component, obtained from [`DebugTools::register`].
///
/// Cloning is cheap; every clone logs through the same facility. The
/// [`debug_log!`](crate::debug_log) and [`paced_log!`](crate::paced_log)
/// macros record the calling function; the plain methods fall back to the
/// caller's `file:line`.
pub struct ComponentLogger<S = SettingsFile> {
    tools: Arc<DebugTools<S>>,
    component: ComponentId,
}

impl<S> Clone for ComponentLogger<S> {
    fn clone(&self) -> Self {
        Self {
            tools: Arc::clone(&self.tools),
            component: self.component.clone(),
        }
    }
}

impl<S> std::fmt::Debug for ComponentLogger<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentLogger")
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

impl<S: SettingsStore> ComponentLogger<S> {
    pub(crate) fn new(tools: Arc<DebugTools<S>>, component: ComponentId) -> Self {
        Self { tools, component }
    }

    /// The component this logger speaks for.
    #[must_use]
    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    /// The shared facility.
    #[must_use]
    pub fn tools(&self) -> &Arc<DebugTools<S>> {
        &self.tools
    }

    /// Whether a line in `category` would currently be written.
    pub fn enabled(&self, category: &str) -> bool {
        self.tools.should_emit(&self.component, category)
    }

    /// Writes `message` in `category` if its switch is on.
    #[track_caller]
    pub fn log(&self, category: &str, message: &str) {
        self.log_at(CallSite::caller(), category, || message.to_owned());
    }

    /// Writes `message` in `category` if its switch is on and `delay` has
    /// passed since the last paced line.
    #[track_caller]
    pub fn paced_log(&self, category: &str, message: &str, delay: Duration) {
        self.paced_log_at(CallSite::caller(), category, Some(delay), || {
            message.to_owned()
        });
    }

    /// Gated write from an explicit call site. Used by [`debug_log!`](crate::debug_log).
    pub fn log_at<F>(&self, site: CallSite, category: &str, message: F)
    where
        F: FnOnce() -> String,
    {
        self.tools
            .log_with(&self.component, site, category, message);
    }

    /// Paced write from an explicit call site; `None` uses the configured
    /// default cooldown. Used by [`paced_log!`](crate::paced_log).
    pub fn paced_log_at<F>(&self, site: CallSite, category: &str, delay: Option<Duration>, message: F)
    where
        F: FnOnce() -> String,
    {
        let delay = delay.unwrap_or(self.tools.config().default_pace);
        self.tools
            .paced_log_with(&self.component, site, category, delay, message);
    }

    /// See [`DebugTools::null_check`].
    pub fn null_check<T: ?Sized>(&self, object: Option<&T>, name: &str, log_if_present: bool) -> bool {
        self.tools.null_check(object, name, log_if_present)
    }

    /// See [`DebugTools::dump_object`].
    pub fn dump_object<T: Describe + ?Sized>(&self, object: Option<&T>, name: &str) {
        self.tools.dump_object(object, name);
    }
}

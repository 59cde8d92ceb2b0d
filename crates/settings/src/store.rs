//! crates/settings/src/store.rs
//! The storage seam consumed by the switch registry.

use crate::{SettingDefinition, SettingEntry, SettingHandle, SettingsError};

/// Persisted boolean configuration store.
///
/// Implementations decide where values live; the switch registry only relies
/// on the bind-or-create contract of [`bind`](Self::bind) and on
/// [`get`](Self::get) reflecting the latest value, including edits made by an
/// operator and picked up through [`reload`](Self::reload).
pub trait SettingsStore {
    /// Binds `definition`, creating it with `default` when it does not exist.
    ///
    /// An entry that is already present (bound earlier or loaded from disk)
    /// keeps its current value; its default and description are refreshed.
    fn bind(
        &mut self,
        definition: SettingDefinition,
        default: bool,
        description: &str,
    ) -> SettingHandle;

    /// Returns the handle for `definition` when the entry exists.
    fn lookup(&self, definition: &SettingDefinition) -> Option<SettingHandle>;

    /// Reads the current value. Unknown handles read as `false`.
    fn get(&self, handle: SettingHandle) -> bool;

    /// Overwrites the current value.
    fn set(&mut self, handle: SettingHandle, value: bool) -> Result<(), SettingsError>;

    /// Iterates every entry in insertion order.
    fn entries(&self) -> Box<dyn Iterator<Item = SettingEntry<'_>> + '_>;

    /// Persists all entries.
    fn save(&mut self) -> Result<(), SettingsError>;

    /// Re-reads persisted values, adopting external edits.
    fn reload(&mut self) -> Result<(), SettingsError>;
}

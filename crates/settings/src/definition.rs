//! crates/settings/src/definition.rs
//! Addressing types for persisted entries.

use std::fmt;

/// Section and key identifying one persisted entry.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SettingDefinition {
    section: String,
    key: String,
}

impl SettingDefinition {
    /// Creates a definition for `key` inside `section`.
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Returns the section (namespace) the entry lives in.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the entry's key within its section.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for SettingDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.key)
    }
}

/// Opaque reference to an entry bound in a [`SettingsStore`](crate::SettingsStore).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SettingHandle(pub(crate) usize);

/// Borrowed view of one entry, as yielded by
/// [`SettingsStore::entries`](crate::SettingsStore::entries).
#[derive(Clone, Copy, Debug)]
pub struct SettingEntry<'a> {
    /// Handle addressing the entry.
    pub handle: SettingHandle,
    /// Section and key of the entry.
    pub definition: &'a SettingDefinition,
    /// Current value.
    pub value: bool,
    /// Default supplied when the entry was bound, if it has been bound.
    pub default: Option<bool>,
    /// Description supplied when the entry was bound, if it has been bound.
    pub description: Option<&'a str>,
}

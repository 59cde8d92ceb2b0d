//! crates/settings/src/file/mod.rs
//! TOML-backed [`SettingsStore`] implementation.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{SettingDefinition, SettingEntry, SettingHandle, SettingsError, SettingsStore};

mod parse;
mod render;

#[derive(Clone, Debug)]
struct Entry {
    definition: SettingDefinition,
    value: bool,
    default: Option<bool>,
    description: Option<String>,
}

/// Settings store persisted as a TOML file.
///
/// Each section becomes a quoted table header and each entry a boolean key
/// preceded by its description and default as comments:
///
/// ```toml
/// ["switchlog"]
///
/// ## When enabled, no debug messages from components using switchlog will be logged.
/// # Default value: true
/// "Force Debug Logging Off" = true
/// ```
///
/// Stores created with [`in_memory`](Self::in_memory) behave identically but
/// treat [`save`](SettingsStore::save) and [`reload`](SettingsStore::reload)
/// as no-ops.
#[derive(Clone, Debug, Default)]
pub struct SettingsFile {
    path: Option<PathBuf>,
    entries: Vec<Entry>,
    index: HashMap<SettingDefinition, SettingHandle>,
}

impl SettingsFile {
    /// Creates a store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store at `path`, loading any entries already persisted.
    ///
    /// A missing file is not an error; it is created on the first
    /// [`save`](SettingsStore::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let mut store = Self {
            path: Some(path.into()),
            ..Self::default()
        };
        store.reload()?;
        Ok(store)
    }

    /// Parses entries from TOML text without attaching a file.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let mut store = Self::in_memory();
        for (definition, value) in parse::parse_entries(Path::new("<memory>"), text)? {
            store.adopt(definition, value);
        }
        Ok(store)
    }

    /// Returns the backing file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the store in its on-disk TOML form.
    #[must_use]
    pub fn to_toml_string(&self) -> String {
        render::render(self.entries.iter().map(|entry| render::RenderEntry {
            definition: &entry.definition,
            value: entry.value,
            default: entry.default,
            description: entry.description.as_deref(),
        }))
    }

    fn adopt(&mut self, definition: SettingDefinition, value: bool) {
        match self.index.get(&definition) {
            Some(handle) => self.entries[handle.0].value = value,
            None => {
                let handle = SettingHandle(self.entries.len());
                self.index.insert(definition.clone(), handle);
                self.entries.push(Entry {
                    definition,
                    value,
                    default: None,
                    description: None,
                });
            }
        }
    }
}

impl SettingsStore for SettingsFile {
    fn bind(
        &mut self,
        definition: SettingDefinition,
        default: bool,
        description: &str,
    ) -> SettingHandle {
        if let Some(&handle) = self.index.get(&definition) {
            let entry = &mut self.entries[handle.0];
            entry.default = Some(default);
            entry.description = Some(description.to_owned());
            return handle;
        }

        let handle = SettingHandle(self.entries.len());
        self.index.insert(definition.clone(), handle);
        self.entries.push(Entry {
            definition,
            value: default,
            default: Some(default),
            description: Some(description.to_owned()),
        });
        handle
    }

    fn lookup(&self, definition: &SettingDefinition) -> Option<SettingHandle> {
        self.index.get(definition).copied()
    }

    fn get(&self, handle: SettingHandle) -> bool {
        self.entries.get(handle.0).is_some_and(|entry| entry.value)
    }

    fn set(&mut self, handle: SettingHandle, value: bool) -> Result<(), SettingsError> {
        let entry = self
            .entries
            .get_mut(handle.0)
            .ok_or(SettingsError::UnknownHandle(handle))?;
        entry.value = value;
        Ok(())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = SettingEntry<'_>> + '_> {
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .map(|(index, entry)| SettingEntry {
                    handle: SettingHandle(index),
                    definition: &entry.definition,
                    value: entry.value,
                    default: entry.default,
                    description: entry.description.as_deref(),
                }),
        )
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        // Write beside the target and rename so readers never see a torn file.
        let mut staging = path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        fs::write(&staging, self.to_toml_string()).map_err(|e| SettingsError::io(&staging, e))?;
        fs::rename(&staging, path).map_err(|e| SettingsError::io(path, e))?;

        tracing::debug!(target: "switchlog::settings", path = %path.display(), entries = self.entries.len(), "settings saved");
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SettingsError> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(SettingsError::io(path, e)),
        };

        for (definition, value) in parse::parse_entries(&path, &text)? {
            self.adopt(definition, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

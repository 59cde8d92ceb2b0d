//! crates/settings/src/error.rs
//! Error type for settings storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::SettingHandle;

/// Errors raised while loading, editing or persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("failed to access settings file {}: {source}", path.display())]
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The settings file is not valid TOML.
    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A top-level value is not a section table.
    #[error("settings entry '{name}' is not a section")]
    NotASection {
        /// Name of the offending top-level value.
        name: String,
    },
    /// An entry inside a section holds something other than a boolean.
    #[error("settings entry '{section}/{key}' is not a boolean")]
    NotBoolean {
        /// Section containing the entry.
        section: String,
        /// Key of the entry.
        key: String,
    },
    /// The handle was not issued by this store.
    #[error("unknown settings handle {0:?}")]
    UnknownHandle(SettingHandle),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

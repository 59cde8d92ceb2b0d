#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/settings/src/lib.rs
//!
//! # Overview
//!
//! `settings` is the persisted boolean configuration store that backs every
//! switch handed out by the `logging` crate. Entries are grouped into
//! *sections* and addressed by a *key* inside their section. Each entry carries
//! a default and a human-readable description so operators editing the file
//! by hand know what a switch controls.
//!
//! # Design
//!
//! The [`SettingsStore`] trait is the seam the gate depends on. It mirrors the
//! bind-or-create model used by plugin hosts: [`SettingsStore::bind`] returns
//! the persisted value when the entry already exists and only falls back to the
//! supplied default for entries that have never been written.
//! [`SettingsFile`] is the TOML implementation; it keeps every entry in memory
//! and rewrites the whole file atomically on [`SettingsStore::save`].
//!
//! # Invariants
//!
//! - A [`SettingHandle`] stays valid for the lifetime of the store that issued
//!   it. Entries are never removed.
//! - Binding the same [`SettingDefinition`] twice yields the same handle.
//! - [`SettingsStore::reload`] updates values in place; handles survive.
//!
//! # Errors
//!
//! Fallible operations return [`SettingsError`], covering I/O failures, TOML
//! syntax errors and values that are not booleans.
//!
//! # Examples
//!
//! ```
//! use settings::{SettingDefinition, SettingsFile, SettingsStore};
//!
//! let mut store = SettingsFile::in_memory();
//! let verbose = store.bind(
//!     SettingDefinition::new("Mods.net", "Debug Sockets"),
//!     false,
//!     "Whether debug messages should be logged for net - Sockets",
//! );
//! assert!(!store.get(verbose));
//!
//! store.set(verbose, true)?;
//! assert!(store.get(verbose));
//! # Ok::<(), settings::SettingsError>(())
//! ```

mod definition;
mod error;
mod file;
mod store;

pub use definition::{SettingDefinition, SettingEntry, SettingHandle};
pub use error::SettingsError;
pub use file::SettingsFile;
pub use store::SettingsStore;

#![deny(unsafe_code)]

//! crates/test-support/src/lib.rs
//! Temporary settings files shared by the workspace's tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File name used for fixture settings files.
pub const SETTINGS_FILE_NAME: &str = "switches.toml";

/// A settings file path inside a private temporary directory.
///
/// The directory, and therefore the file, is removed when the fixture drops.
#[derive(Debug)]
pub struct SettingsFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl SettingsFixture {
    /// Creates a fixture whose settings file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temporary directory");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        Self { _dir: dir, path }
    }

    /// Creates a fixture whose settings file already holds `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let fixture = Self::new();
        fixture.write(contents);
        fixture
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reports whether the settings file has been created.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the settings file.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read settings file")
    }

    /// Overwrites the settings file, as an operator editing it by hand would.
    pub fn write(&self, contents: &str) {
        fs::write(&self.path, contents).expect("write settings file");
    }
}

impl Default for SettingsFixture {
    fn default() -> Self {
        Self::new()
    }
}

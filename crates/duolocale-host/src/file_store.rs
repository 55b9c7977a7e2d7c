use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use duolocale::{PreferenceStore, StoreError};
use thiserror::Error;
use tracing::debug;

const PREFERENCES_FILE: &str = "preferences.json";
const DEFAULT_KEY: &str = "lang";

#[derive(Debug, Error)]
pub enum FileStoreError {
    /// No configuration directory is available on this platform.
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

/// A [`PreferenceStore`] backed by a small JSON key/value file.
///
/// The file is a flat JSON object of strings and the locale tag lives
/// under a single fixed key, so unrelated entries other tooling keeps in
/// the same file survive writes. Loads are forgiving: a missing,
/// unreadable or malformed file yields no stored preference.
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    /// Creates a store writing to
    /// `<config_dir>/<app_name>/preferences.json`.
    pub fn in_config_dir(app_name: &str) -> Result<Self, FileStoreError> {
        let mut path = dirs::config_dir().ok_or(FileStoreError::NoConfigDir)?;
        path.push(app_name);
        path.push(PREFERENCES_FILE);
        Ok(Self::at_path(path))
    }

    /// Creates a store writing to an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: DEFAULT_KEY.to_owned(),
        }
    }

    /// Overrides the key the locale tag is stored under.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    "Ignoring malformed preference file {}: {}",
                    self.path.display(),
                    e
                );
                HashMap::new()
            },
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<String> {
        let mut entries = self.read_entries();
        entries.remove(&self.key)
    }

    fn store(&mut self, tag: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries();
        entries.insert(self.key.clone(), tag.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(anyhow::Error::from)?;
        }
        let content = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
        fs::write(&self.path, content).map_err(anyhow::Error::from)?;
        Ok(())
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Preference persistence for the locale selection.
//!
//! The subsystem speaks a tiny key-value contract and uses exactly one
//! key, storing the locale code in its raw string form. A missing or
//! corrupt backing file reads as "no preference", never as an error.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "settings.toml";
const APP_NAME: &str = "AgariValidator";

/// The single key under which the locale code is persisted.
pub const LOCALE_PREFERENCE_KEY: &str = "agari-locale";

/// Key-value persistence collaborator.
pub trait PreferenceStore {
    /// Returns the stored value, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a TOML file under the platform config directory.
///
/// The file is read once when the store is opened; every `set` rewrites
/// it. On a platform without a config directory the store degrades to
/// in-memory only.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at the default platform location.
    pub fn open_default() -> Self {
        Self::open(default_prefs_path())
    }

    /// Opens the store at an explicit path (`None` for in-memory only).
    pub fn open(path: Option<PathBuf>) -> Self {
        let values = path.as_deref().map(load_values).unwrap_or_default();
        Self { path, values }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(path) = &self.path {
            save_values(&self.values, path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFS_FILE);
        path
    })
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => BTreeMap::new(),
    }
}

fn save_values(values: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(values)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_and_get_round_trip_through_the_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join(PREFS_FILE);

        let mut store = FilePreferenceStore::open(Some(prefs_path.clone()));
        store
            .set(LOCALE_PREFERENCE_KEY, "ja")
            .expect("failed to save preference");

        let reopened = FilePreferenceStore::open(Some(prefs_path));
        assert_eq!(reopened.get(LOCALE_PREFERENCE_KEY), Some("ja".to_string()));
    }

    #[test]
    fn invalid_toml_reads_as_no_preference() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join(PREFS_FILE);
        fs::write(&prefs_path, "not = valid = toml").expect("failed to write invalid toml");

        let store = FilePreferenceStore::open(Some(prefs_path));
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), None);
    }

    #[test]
    fn missing_file_reads_as_no_preference() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FilePreferenceStore::open(Some(temp_dir.path().join(PREFS_FILE)));
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join("deep").join("path").join(PREFS_FILE);

        let mut store = FilePreferenceStore::open(Some(prefs_path.clone()));
        store
            .set(LOCALE_PREFERENCE_KEY, "en")
            .expect("set should create directories");
        assert!(prefs_path.exists());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = MemoryPreferenceStore::new();
        store.set(LOCALE_PREFERENCE_KEY, "en").expect("set failed");
        store.set(LOCALE_PREFERENCE_KEY, "ja").expect("set failed");
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), Some("ja".to_string()));
    }

    #[test]
    fn pathless_store_stays_in_memory() {
        let mut store = FilePreferenceStore::open(None);
        store.set(LOCALE_PREFERENCE_KEY, "ja").expect("set failed");
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), Some("ja".to_string()));
    }
}

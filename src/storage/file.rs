//! File-backed settings storage.
//!
//! All entries live in a single JSON document (a flat string map) inside
//! the per-user settings directory. Writes go through a temp file + rename
//! so a crash never leaves the file half-written.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, warn};

use super::SettingsStorage;
use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, STORAGE_FILE_NAME};

/// Resolves the settings directory.
///
/// The `WERKSITE_CONFIG_DIR` environment variable wins when set; otherwise
/// the platform config directory is used:
///
/// - Linux: `~/.config/Werksite/`
/// - macOS: `~/Library/Application Support/Werksite/`
/// - Windows: `%APPDATA%\Werksite\`
pub fn settings_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let dir = dirs::config_dir()
        .context("Failed to determine config directory")?
        .join(APP_DIR_NAME);

    Ok(dir)
}

/// Durable [`SettingsStorage`] backed by one JSON file.
///
/// Entries are held in memory and flushed on every mutation. A storage
/// file that fails to parse is set aside under a timestamped `.corrupt-*`
/// name and the store starts empty; the broken file is never overwritten
/// in place so the user can recover it.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage file in the default settings directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(settings_dir()?.join(STORAGE_FILE_NAME)))
    }

    /// Opens (or prepares to create) the storage file at `path`.
    ///
    /// Missing and corrupt files both yield an empty storage; corrupt
    /// files are preserved under a backup name first.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        Self { path, entries }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No readable storage file, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Storage file is corrupt, setting it aside");
                Self::preserve_corrupt(path);
                BTreeMap::new()
            }
        }
    }

    /// Renames an unparseable storage file to a timestamped backup.
    ///
    /// Best-effort: a failed rename only logs, since the caller already
    /// decided to continue with empty storage either way.
    fn preserve_corrupt(path: &Path) {
        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
        let backup = path.with_extension(format!("json.corrupt-{stamp}"));
        if let Err(e) = fs::rename(path, &backup) {
            warn!(path = %path.display(), error = %e, "Failed to set aside corrupt storage file");
        } else {
            warn!(backup = %backup.display(), "Corrupt storage preserved for inspection");
        }
    }

    /// Writes all entries to disk using the temp file + rename pattern.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize settings storage")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp storage file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp storage file to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl SettingsStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // The in-memory entry is updated first: callers treat memory as
        // authoritative and persistence as best-effort.
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path().join("storage.json"));
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set("design-style", "rounded").unwrap();
        storage.set("dark-mode", "true").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("design-style"), Some("rounded".to_string()));
        assert_eq!(reopened.get("dark-mode"), Some("true".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set("key", "value").unwrap();
        storage.remove("key").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("key"), None);
    }

    #[test]
    fn test_corrupt_file_is_preserved_and_storage_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::open(&path);
        assert!(storage.keys().is_empty());

        // The broken file was moved aside, not deleted
        let backups: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
            .collect();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn test_creates_parent_directories_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set("key", "value").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_settings_dir_env_override() {
        // Serialized via a fresh env var value per test binary; the
        // override must win over the platform directory.
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let dir = settings_dir().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(dir, temp_dir.path());
    }
}

//! Durable key/value storage for site settings.
//!
//! The configuration store persists two kinds of entries: one versioned
//! JSON document under [`crate::constants::CONFIG_STORAGE_KEY`], and the
//! flat legacy keys kept around as migration source and rollback target.
//! Both live behind the [`SettingsStorage`] trait so the store never talks
//! to the file system directly and tests can inject read/write failures.

pub mod file;
pub mod memory;

pub use file::{settings_dir, FileStorage};
pub use memory::MemoryStorage;

use anyhow::Result;

/// String key/value storage with best-effort durability.
///
/// Implementations must tolerate arbitrary keys and values; interpretation
/// (JSON parsing, enum validation) happens above this seam. `get` is
/// infallible by contract: an unreadable backend simply has no entries.
pub trait SettingsStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the entry for `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Returns all keys currently present, in unspecified order.
    fn keys(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        let storage: Box<dyn SettingsStorage> = Box::new(MemoryStorage::new());
        assert!(storage.get("anything").is_none());
        assert!(storage.keys().is_empty());
    }
}

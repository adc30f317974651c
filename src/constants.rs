//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, storage keys, and the configuration
//! schema version.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Werksite";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "werksite";

/// Current version tag of the persisted configuration schema.
///
/// Stored configurations carrying any other (or no) version tag are handed
/// to legacy migration instead of being merged directly.
pub const CONFIG_VERSION: &str = "2.0.0";

/// Storage key under which the versioned configuration document lives.
pub const CONFIG_STORAGE_KEY: &str = "werksite.config";

/// Environment variable that overrides the settings directory.
///
/// Used by the CLI tests to isolate state; end users can set it to keep
/// several independent site profiles side by side.
pub const CONFIG_DIR_ENV: &str = "WERKSITE_CONFIG_DIR";

/// File name of the durable key/value store inside the settings directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "Werksite";

//! One-time migration from the pre-versioning flat storage entries.
//!
//! Early releases persisted each setting under its own flat key
//! (`site-mode`, `design-style`, `feature-contactBar`, ...). This module
//! translates that key set into a current [`SiteConfig`], preserving what
//! the user had chosen. Each key is read independently; an absent or
//! malformed value keeps the compiled-in default for that field and never
//! blocks the remaining keys.

use tracing::{debug, info};

use super::schema::{ColorScheme, ConfigEnum, DesignStyle, HeroType, LayoutMode, SiteConfig};
use crate::storage::SettingsStorage;

/// Flat keys written by pre-versioning releases.
///
/// These stay the rollback target of
/// [`crate::config::ConfigStore::rollback_to_legacy`], so the set must not
/// change even though no current release writes it during normal operation.
pub mod legacy_keys {
    /// One-page vs multi-page mode
    pub const SITE_MODE: &str = "site-mode";
    /// Design style
    pub const DESIGN_STYLE: &str = "design-style";
    /// Color scheme
    pub const COLOR_SCHEME: &str = "color-scheme";
    /// Dark-mode flag
    pub const DARK_MODE: &str = "dark-mode";
    /// Contact bar feature flag
    pub const FEATURE_CONTACT_BAR: &str = "feature-contactBar";
    /// Side contact feature flag
    pub const FEATURE_SIDE_CONTACT: &str = "feature-sideContact";
    /// Mobile contact feature flag
    pub const FEATURE_MOBILE_CONTACT: &str = "feature-mobileContact";
    /// Status banner feature flag
    pub const FEATURE_STATUS_INFO: &str = "feature-statusInfo";
    /// WhatsApp feature flag
    pub const FEATURE_WHATSAPP: &str = "feature-whatsapp";
    /// Hero variant
    pub const HERO_TYPE: &str = "hero-type";
    /// "User has configured the site before" marker
    pub const HAS_CONFIGURED: &str = "has-configured";
}

/// All legacy keys, in a stable order for diagnostics output.
pub const ALL_LEGACY_KEYS: [&str; 11] = [
    legacy_keys::SITE_MODE,
    legacy_keys::DESIGN_STYLE,
    legacy_keys::COLOR_SCHEME,
    legacy_keys::DARK_MODE,
    legacy_keys::FEATURE_CONTACT_BAR,
    legacy_keys::FEATURE_SIDE_CONTACT,
    legacy_keys::FEATURE_MOBILE_CONTACT,
    legacy_keys::FEATURE_STATUS_INFO,
    legacy_keys::FEATURE_WHATSAPP,
    legacy_keys::HERO_TYPE,
    legacy_keys::HAS_CONFIGURED,
];

/// Reads one enum-valued legacy key; invalid values keep the default.
fn migrate_enum<T: ConfigEnum>(storage: &dyn SettingsStorage, key: &str, target: &mut T) {
    if let Some(raw) = storage.get(key) {
        match T::parse(&raw) {
            Some(value) => {
                debug!(key, value = raw, "Migrated legacy entry");
                *target = value;
            }
            None => debug!(key, value = raw, "Ignoring malformed legacy entry"),
        }
    }
}

/// Reads one boolean legacy key; only `"true"`/`"false"` are valid.
fn migrate_bool(storage: &dyn SettingsStorage, key: &str, target: &mut bool) {
    if let Some(raw) = storage.get(key) {
        match raw.as_str() {
            "true" => *target = true,
            "false" => *target = false,
            _ => {
                debug!(key, value = raw, "Ignoring malformed legacy entry");
                return;
            }
        }
        debug!(key, value = raw, "Migrated legacy entry");
    }
}

/// Translates the flat legacy entries in `storage` into a [`SiteConfig`].
///
/// Pure with respect to its inputs apart from logging: the same entries
/// always yield the same configuration, and storage is never written.
#[must_use]
pub fn migrate(storage: &dyn SettingsStorage) -> SiteConfig {
    let mut config = SiteConfig::new();

    migrate_enum::<LayoutMode>(storage, legacy_keys::SITE_MODE, &mut config.layout.mode);
    migrate_enum::<DesignStyle>(storage, legacy_keys::DESIGN_STYLE, &mut config.layout.design);
    migrate_enum::<ColorScheme>(
        storage,
        legacy_keys::COLOR_SCHEME,
        &mut config.theme.color_scheme,
    );
    migrate_bool(storage, legacy_keys::DARK_MODE, &mut config.theme.dark_mode);

    migrate_bool(
        storage,
        legacy_keys::FEATURE_CONTACT_BAR,
        &mut config.features.contact_bar,
    );
    migrate_bool(
        storage,
        legacy_keys::FEATURE_SIDE_CONTACT,
        &mut config.features.side_contact,
    );
    migrate_bool(
        storage,
        legacy_keys::FEATURE_MOBILE_CONTACT,
        &mut config.features.mobile_contact,
    );
    migrate_bool(
        storage,
        legacy_keys::FEATURE_STATUS_INFO,
        &mut config.features.status_info,
    );
    migrate_bool(
        storage,
        legacy_keys::FEATURE_WHATSAPP,
        &mut config.features.whatsapp,
    );

    migrate_enum::<HeroType>(storage, legacy_keys::HERO_TYPE, &mut config.hero.hero_type);

    // Prior configuration implies this is not a first visit, and re-opens
    // the quick-edit panel the user had already discovered.
    let mut has_configured = false;
    migrate_bool(storage, legacy_keys::HAS_CONFIGURED, &mut has_configured);
    config.system.is_first_visit = !has_configured;
    config.system.quick_edit_mode = has_configured;

    let found = ALL_LEGACY_KEYS
        .iter()
        .filter(|key| storage.get(key).is_some())
        .count();
    if found > 0 {
        info!(entries = found, "Migrated legacy configuration entries");
    } else {
        debug!("No legacy entries found, using defaults");
    }

    config
}

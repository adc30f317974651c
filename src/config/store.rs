//! The configuration store.
//!
//! Single source of truth for the session's [`SiteConfig`]: owns the
//! storage backend, keeps the authoritative in-memory copy, persists
//! best-effort, and notifies subscribers after every change. Constructed
//! explicitly and handed to the embedder; there is no hidden global
//! instance.
//!
//! No public operation returns an error or panics. Storage failures are
//! logged and degrade to the safest known-good value: a broken read falls
//! back to legacy migration and then to compiled-in defaults, and a failed
//! write leaves the in-memory copy authoritative for the rest of the
//! session.

use tracing::{debug, info, warn};

use super::migration::{self, legacy_keys};
use super::patch::ConfigPatch;
use super::schema::{ConfigEnum, SiteConfig};
use crate::constants::CONFIG_STORAGE_KEY;
use crate::storage::SettingsStorage;
use crate::styles::StyleMarker;

/// Callback invoked with the new configuration and its style marker after
/// every successful update or reset.
pub type Listener = Box<dyn FnMut(&SiteConfig, &StyleMarker)>;

/// Handle returned by [`ConfigStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the configuration, its persistence, and its subscribers.
pub struct ConfigStore {
    storage: Box<dyn SettingsStorage>,
    config: SiteConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ConfigStore {
    /// Opens a store over `storage`.
    ///
    /// Loads the primary document if it parses and carries the current
    /// version tag; anything else (absent, corrupt, or version-mismatched)
    /// goes through legacy migration, which itself falls back to the
    /// compiled-in defaults when no legacy entries exist.
    #[must_use]
    pub fn open(storage: Box<dyn SettingsStorage>) -> Self {
        let config = Self::load(storage.as_ref());
        Self {
            storage,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn load(storage: &dyn SettingsStorage) -> SiteConfig {
        let Some(raw) = storage.get(CONFIG_STORAGE_KEY) else {
            debug!("No stored configuration, running legacy migration");
            return migration::migrate(storage);
        };

        match serde_json::from_str::<SiteConfig>(&raw) {
            Ok(config) if config.is_current_version() => {
                debug!(version = %config.version, "Loaded stored configuration");
                config
            }
            Ok(config) => {
                info!(
                    version = %config.version,
                    "Stored configuration has a stale version tag, running legacy migration"
                );
                migration::migrate(storage)
            }
            Err(e) => {
                warn!(error = %e, "Stored configuration is unreadable, running legacy migration");
                migration::migrate(storage)
            }
        }
    }

    /// Returns a defensive copy of the current configuration.
    ///
    /// Mutating the returned value has no effect on the store.
    #[must_use]
    pub fn config(&self) -> SiteConfig {
        self.config.clone()
    }

    /// The style marker of the current configuration.
    #[must_use]
    pub fn style_marker(&self) -> StyleMarker {
        StyleMarker::from_config(&self.config)
    }

    /// Read access to the underlying storage, for diagnostics.
    #[must_use]
    pub fn storage(&self) -> &dyn SettingsStorage {
        self.storage.as_ref()
    }

    /// Applies `patch` to the configuration, persists, and notifies.
    ///
    /// The in-memory merge always takes effect; persistence is attempted
    /// before listeners run but its failure only logs. An empty patch
    /// still counts as a successful update and notifies.
    pub fn update(&mut self, patch: &ConfigPatch) {
        patch.apply_to(&mut self.config);
        self.persist();
        self.notify();
    }

    /// Replaces the configuration with a fresh copy of the defaults.
    pub fn reset_to_defaults(&mut self) {
        self.config = SiteConfig::new();
        info!("Configuration reset to defaults");
        self.persist();
        self.notify();
    }

    /// Registers `listener` and returns its subscription handle.
    ///
    /// Listeners run in insertion order after every update or reset; the
    /// order carries no meaning and must not be relied on.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes the listener behind `id`. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Writes the current configuration back into the flat legacy keys.
    ///
    /// Emergency downgrade path for rolling back to a pre-versioning
    /// release. Best-effort: each key is written independently and a
    /// failed write only logs.
    pub fn rollback_to_legacy(&mut self) {
        let config = self.config.clone();
        let entries = [
            (legacy_keys::SITE_MODE, config.layout.mode.as_str().to_string()),
            (
                legacy_keys::DESIGN_STYLE,
                config.layout.design.as_str().to_string(),
            ),
            (
                legacy_keys::COLOR_SCHEME,
                config.theme.color_scheme.as_str().to_string(),
            ),
            (legacy_keys::DARK_MODE, config.theme.dark_mode.to_string()),
            (
                legacy_keys::FEATURE_CONTACT_BAR,
                config.features.contact_bar.to_string(),
            ),
            (
                legacy_keys::FEATURE_SIDE_CONTACT,
                config.features.side_contact.to_string(),
            ),
            (
                legacy_keys::FEATURE_MOBILE_CONTACT,
                config.features.mobile_contact.to_string(),
            ),
            (
                legacy_keys::FEATURE_STATUS_INFO,
                config.features.status_info.to_string(),
            ),
            (
                legacy_keys::FEATURE_WHATSAPP,
                config.features.whatsapp.to_string(),
            ),
            (
                legacy_keys::HERO_TYPE,
                config.hero.hero_type.as_str().to_string(),
            ),
            (
                legacy_keys::HAS_CONFIGURED,
                (!config.system.is_first_visit).to_string(),
            ),
        ];

        let mut failed = 0usize;
        for (key, value) in entries {
            if let Err(e) = self.storage.set(key, &value) {
                warn!(key, error = %e, "Failed to write legacy entry");
                failed += 1;
            }
        }
        if failed == 0 {
            info!("Configuration written back to legacy keys");
        } else {
            warn!(failed, "Legacy rollback completed with failed writes");
        }
    }

    /// Best-effort persistence of the primary document.
    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.config) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize configuration, skipping persistence");
                return;
            }
        };
        if let Err(e) = self.storage.set(CONFIG_STORAGE_KEY, &raw) {
            warn!(error = %e, "Failed to persist configuration, in-memory state stays authoritative");
        }
    }

    /// Invokes every listener with the new configuration and marker.
    fn notify(&mut self) {
        let config = self.config.clone();
        let marker = StyleMarker::from_config(&config);
        for (_, listener) in &mut self.listeners {
            listener(&config, &marker);
        }
    }
}

//! Site configuration: schema, patches, migration, presets, and the store.
//!
//! The update path is: a caller builds a [`ConfigPatch`], hands it to
//! [`ConfigStore::update`], the store merges it leaf by leaf, persists the
//! document best-effort, and notifies subscribers with the new
//! [`SiteConfig`] and its [`crate::styles::StyleMarker`].

pub mod migration;
pub mod patch;
pub mod presets;
pub mod schema;
pub mod store;

pub use patch::{
    ConfigPatch, FeaturePatch, HeaderPatch, HeadingPatch, HeroPatch, LayoutPatch, StylePatch,
    SystemPatch, ThemePatch,
};
pub use presets::{apply_preset, StylePreset};
pub use schema::{
    BadgeStyle, ColorScheme, ConfigEnum, DesignStyle, EditorTab, FeatureFlags, FontFamily,
    HeaderConfig, HeaderVariant, HeadingColor, HeadingStyle, HeroType, LayoutMode, LayoutVariant,
    MobileMenuType, RadiusScale, SiteConfig, SpacingScale, StylePackage,
};
pub use store::{ConfigStore, Listener, SubscriptionId};

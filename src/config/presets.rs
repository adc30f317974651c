//! Compiled-in style preset catalog.
//!
//! A preset bundles design style, heading treatment, typography, badge
//! shape and spacing behind one id, so a single click changes everything
//! consistently. The catalog is read-only at runtime; applying a preset
//! is a pure computation and the caller pushes the result into the store.

use tracing::debug;

use super::patch::{ConfigPatch, HeadingPatch, LayoutPatch, StylePatch};
use super::schema::{
    BadgeStyle, ConfigEnum, DesignStyle, FontFamily, HeadingStyle, SiteConfig, SpacingScale,
    StylePackage,
};

/// One entry of the preset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    /// Package id this preset sets
    pub id: StylePackage,
    /// Display name shown in the quick-edit panel
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Icon glyph shown next to the name
    pub icon: &'static str,
    /// Design style the preset applies
    pub design: DesignStyle,
    /// Whether headings get an underline
    pub underline: bool,
    /// Whether headings get gradient treatment
    pub gradient: bool,
    /// Font family the preset applies
    pub font_family: FontFamily,
    /// Badge shape the preset applies
    pub badge_style: BadgeStyle,
    /// Spacing scale the preset applies
    pub spacing: SpacingScale,
}

const CATALOG: [StylePreset; 3] = [
    StylePreset {
        id: StylePackage::Einfach,
        name: "Einfach",
        description: "Ruhig und reduziert: klare Kanten, wenig Dekoration",
        icon: "▢",
        design: DesignStyle::Angular,
        underline: false,
        gradient: false,
        font_family: FontFamily::Sans,
        badge_style: BadgeStyle::Minimal,
        spacing: SpacingScale::Compact,
    },
    StylePreset {
        id: StylePackage::Standard,
        name: "Standard",
        description: "Ausgewogen: weiche Ecken und dezente Schatten",
        icon: "◆",
        design: DesignStyle::Rounded,
        underline: true,
        gradient: false,
        font_family: FontFamily::Sans,
        badge_style: BadgeStyle::Rounded,
        spacing: SpacingScale::Comfortable,
    },
    StylePreset {
        id: StylePackage::Modern,
        name: "Modern",
        description: "Ausdrucksstark: Verläufe, Unschärfe und große Radien",
        icon: "✦",
        design: DesignStyle::Modern,
        underline: true,
        gradient: true,
        font_family: FontFamily::Display,
        badge_style: BadgeStyle::Pill,
        spacing: SpacingScale::Spacious,
    },
];

/// The full preset catalog, in display order.
#[must_use]
pub fn catalog() -> &'static [StylePreset] {
    &CATALOG
}

/// Looks up a preset by raw id, accepting the legacy english aliases.
#[must_use]
pub fn find(id: &str) -> Option<&'static StylePreset> {
    let package = StylePackage::parse(id)?;
    CATALOG.iter().find(|preset| preset.id == package)
}

impl StylePreset {
    /// The configuration changes this preset declares.
    ///
    /// Heading treatment derives from the underline/gradient flags: a
    /// gradient implies an underline in the gradient style, a plain
    /// underline uses the solid style, and neither turns decoration off.
    #[must_use]
    pub fn as_patch(&self) -> ConfigPatch {
        let heading_style = if self.gradient {
            HeadingStyle::Gradient
        } else if self.underline {
            HeadingStyle::Solid
        } else {
            HeadingStyle::None
        };

        ConfigPatch {
            layout: Some(LayoutPatch {
                design: Some(self.design),
                ..LayoutPatch::default()
            }),
            headings: Some(HeadingPatch {
                underline: Some(self.underline || self.gradient),
                style: Some(heading_style),
                gradient: Some(self.gradient),
                ..HeadingPatch::default()
            }),
            style: Some(StylePatch {
                package: Some(self.id),
                font_family: Some(self.font_family),
                badge_style: Some(self.badge_style),
                spacing: Some(self.spacing),
                ..StylePatch::default()
            }),
            ..ConfigPatch::default()
        }
    }
}

/// Applies the preset named by `id` to `config`.
///
/// An unknown id is a no-op, not a fault: the input is returned unchanged.
/// All fields the preset does not declare keep their values from `config`.
#[must_use]
pub fn apply_preset(config: &SiteConfig, id: &str) -> SiteConfig {
    match find(id) {
        Some(preset) => preset.as_patch().applied(config),
        None => {
            debug!(id, "Unknown preset id, configuration unchanged");
            config.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{HeadingColor, LayoutMode};

    #[test]
    fn test_catalog_has_three_presets() {
        let ids: Vec<_> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                StylePackage::Einfach,
                StylePackage::Standard,
                StylePackage::Modern
            ]
        );
    }

    #[test]
    fn test_find_accepts_aliases() {
        assert_eq!(find("einfach").unwrap().id, StylePackage::Einfach);
        assert_eq!(find("simple").unwrap().id, StylePackage::Einfach);
        assert_eq!(find("classic").unwrap().id, StylePackage::Standard);
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut config = SiteConfig::new();
        config.theme.dark_mode = true;
        let applied = apply_preset(&config, "nonexistent");
        assert_eq!(applied, config);
    }

    #[test]
    fn test_apply_sets_every_declared_field() {
        let config = SiteConfig::new();
        for preset in catalog() {
            let applied = apply_preset(&config, preset.id.as_str());
            assert_eq!(applied.layout.design, preset.design);
            assert_eq!(applied.style.package, preset.id);
            assert_eq!(applied.style.font_family, preset.font_family);
            assert_eq!(applied.style.badge_style, preset.badge_style);
            assert_eq!(applied.style.spacing, preset.spacing);
            assert_eq!(applied.headings.gradient, preset.gradient);
            assert_eq!(
                applied.headings.underline,
                preset.underline || preset.gradient
            );
        }
    }

    #[test]
    fn test_apply_leaves_undeclared_fields_unchanged() {
        let mut config = SiteConfig::new();
        config.layout.mode = LayoutMode::Multipage;
        config.theme.dark_mode = true;
        config.features.whatsapp = true;
        config.headings.color = HeadingColor::Accent;

        let applied = apply_preset(&config, "modern");
        assert_eq!(applied.layout.mode, LayoutMode::Multipage);
        assert!(applied.theme.dark_mode);
        assert!(applied.features.whatsapp);
        // Heading color is not part of any preset
        assert_eq!(applied.headings.color, HeadingColor::Accent);
    }

    #[test]
    fn test_heading_derivation() {
        let config = SiteConfig::new();

        let einfach = apply_preset(&config, "einfach");
        assert!(!einfach.headings.underline);
        assert_eq!(einfach.headings.style, HeadingStyle::None);

        let standard = apply_preset(&config, "standard");
        assert!(standard.headings.underline);
        assert_eq!(standard.headings.style, HeadingStyle::Solid);

        let modern = apply_preset(&config, "modern");
        assert!(modern.headings.underline);
        assert_eq!(modern.headings.style, HeadingStyle::Gradient);
    }
}

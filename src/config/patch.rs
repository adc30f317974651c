//! Typed update patches with an explicit deep merge.
//!
//! A [`ConfigPatch`] names exactly the leaves it wants to change: a `Some`
//! leaf replaces the corresponding field, a `None` leaf leaves it alone,
//! and an absent group patch leaves the whole group alone. Applying a
//! patch never invents or clears fields it does not name, so callers can
//! change a single leaf without re-sending its siblings.

use super::schema::{
    BadgeStyle, ColorScheme, DesignStyle, EditorTab, FontFamily, HeaderVariant, HeadingColor,
    HeadingStyle, HeroType, LayoutMode, LayoutVariant, MobileMenuType, RadiusScale, SiteConfig,
    SpacingScale, StylePackage,
};

/// Changes to the layout group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPatch {
    /// New layout mode
    pub mode: Option<LayoutMode>,
    /// New design style
    pub design: Option<DesignStyle>,
    /// New feature tier
    pub variant: Option<LayoutVariant>,
}

/// Changes to the theme group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    /// New color scheme
    pub color_scheme: Option<ColorScheme>,
    /// New dark-mode flag
    pub dark_mode: Option<bool>,
}

/// Changes to the feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePatch {
    /// Contact bar toggle
    pub contact_bar: Option<bool>,
    /// Side contact toggle
    pub side_contact: Option<bool>,
    /// Mobile contact toggle
    pub mobile_contact: Option<bool>,
    /// Status banner toggle
    pub status_info: Option<bool>,
    /// WhatsApp toggle
    pub whatsapp: Option<bool>,
}

/// Changes to the header group, including its nested sub-groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderPatch {
    /// New header variant
    pub variant: Option<HeaderVariant>,
    /// Hide-on-scroll toggle
    pub hide_on_scroll: Option<bool>,
    /// Floating header toggle
    pub floating: Option<bool>,
    /// Transparent header toggle
    pub transparent: Option<bool>,
    /// Logo visibility
    pub show_logo: Option<bool>,
    /// CTA visibility
    pub show_cta: Option<bool>,
    /// Mobile menu visibility
    pub show_mobile_menu: Option<bool>,
    /// Mobile menu presentation
    pub mobile_type: Option<MobileMenuType>,
}

/// Changes to the hero group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPatch {
    /// New hero variant
    pub hero_type: Option<HeroType>,
}

/// Changes to the heading decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingPatch {
    /// Underline toggle
    pub underline: Option<bool>,
    /// Decoration style
    pub style: Option<HeadingStyle>,
    /// Decoration color role
    pub color: Option<HeadingColor>,
    /// Gradient heading text toggle
    pub gradient: Option<bool>,
}

/// Changes to typography, badges and spacing.
///
/// The two overrides are double-wrapped: the outer `Option` is "does the
/// patch touch this leaf", the inner one is the stored value (which is
/// itself optional in the schema).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    /// New style package id
    pub package: Option<StylePackage>,
    /// New font family
    pub font_family: Option<FontFamily>,
    /// New badge shape
    pub badge_style: Option<BadgeStyle>,
    /// New spacing scale
    pub spacing: Option<SpacingScale>,
    /// New radius override (`Some(None)` clears the override)
    pub border_radius: Option<Option<RadiusScale>>,
    /// New border override (`Some(None)` clears the override)
    pub borders: Option<Option<bool>>,
}

/// Changes to session bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemPatch {
    /// First-visit flag
    pub is_first_visit: Option<bool>,
    /// Quick-edit flag
    pub quick_edit_mode: Option<bool>,
    /// Active quick-edit tab
    pub active_tab: Option<EditorTab>,
}

/// A set of configuration changes applied atomically by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    /// Layout changes
    pub layout: Option<LayoutPatch>,
    /// Theme changes
    pub theme: Option<ThemePatch>,
    /// Feature flag changes
    pub features: Option<FeaturePatch>,
    /// Header changes
    pub header: Option<HeaderPatch>,
    /// Hero changes
    pub hero: Option<HeroPatch>,
    /// Heading changes
    pub headings: Option<HeadingPatch>,
    /// Style changes
    pub style: Option<StylePatch>,
    /// System changes
    pub system: Option<SystemPatch>,
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ConfigPatch {
    /// True if the patch names no leaves at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shorthand for changing only the layout mode.
    #[must_use]
    pub fn layout_mode(mode: LayoutMode) -> Self {
        Self {
            layout: Some(LayoutPatch {
                mode: Some(mode),
                ..LayoutPatch::default()
            }),
            ..Self::default()
        }
    }

    /// Shorthand for changing only the design style.
    #[must_use]
    pub fn design(design: DesignStyle) -> Self {
        Self {
            layout: Some(LayoutPatch {
                design: Some(design),
                ..LayoutPatch::default()
            }),
            ..Self::default()
        }
    }

    /// Shorthand for changing only the color scheme.
    #[must_use]
    pub fn color_scheme(scheme: ColorScheme) -> Self {
        Self {
            theme: Some(ThemePatch {
                color_scheme: Some(scheme),
                ..ThemePatch::default()
            }),
            ..Self::default()
        }
    }

    /// Shorthand for toggling dark mode.
    #[must_use]
    pub fn dark_mode(on: bool) -> Self {
        Self {
            theme: Some(ThemePatch {
                dark_mode: Some(on),
                ..ThemePatch::default()
            }),
            ..Self::default()
        }
    }

    /// Applies this patch to `config`, leaf by leaf.
    pub fn apply_to(&self, config: &mut SiteConfig) {
        if let Some(layout) = &self.layout {
            merge(&mut config.layout.mode, layout.mode);
            merge(&mut config.layout.design, layout.design);
            merge(&mut config.layout.variant, layout.variant);
        }
        if let Some(theme) = &self.theme {
            merge(&mut config.theme.color_scheme, theme.color_scheme);
            merge(&mut config.theme.dark_mode, theme.dark_mode);
        }
        if let Some(features) = &self.features {
            merge(&mut config.features.contact_bar, features.contact_bar);
            merge(&mut config.features.side_contact, features.side_contact);
            merge(&mut config.features.mobile_contact, features.mobile_contact);
            merge(&mut config.features.status_info, features.status_info);
            merge(&mut config.features.whatsapp, features.whatsapp);
        }
        if let Some(header) = &self.header {
            merge(&mut config.header.variant, header.variant);
            merge(
                &mut config.header.behavior.hide_on_scroll,
                header.hide_on_scroll,
            );
            merge(&mut config.header.behavior.floating, header.floating);
            merge(&mut config.header.behavior.transparent, header.transparent);
            merge(&mut config.header.navigation.show_logo, header.show_logo);
            merge(&mut config.header.navigation.show_cta, header.show_cta);
            merge(
                &mut config.header.navigation.show_mobile_menu,
                header.show_mobile_menu,
            );
            merge(&mut config.header.navigation.mobile_type, header.mobile_type);
        }
        if let Some(hero) = &self.hero {
            merge(&mut config.hero.hero_type, hero.hero_type);
        }
        if let Some(headings) = &self.headings {
            merge(&mut config.headings.underline, headings.underline);
            merge(&mut config.headings.style, headings.style);
            merge(&mut config.headings.color, headings.color);
            merge(&mut config.headings.gradient, headings.gradient);
        }
        if let Some(style) = &self.style {
            merge(&mut config.style.package, style.package);
            merge(&mut config.style.font_family, style.font_family);
            merge(&mut config.style.badge_style, style.badge_style);
            merge(&mut config.style.spacing, style.spacing);
            merge(&mut config.style.border_radius, style.border_radius);
            merge(&mut config.style.borders, style.borders);
        }
        if let Some(system) = &self.system {
            merge(&mut config.system.is_first_visit, system.is_first_visit);
            merge(&mut config.system.quick_edit_mode, system.quick_edit_mode);
            merge(&mut config.system.active_tab, system.active_tab);
        }
    }

    /// Returns a copy of `config` with this patch applied.
    #[must_use]
    pub fn applied(&self, config: &SiteConfig) -> SiteConfig {
        let mut next = config.clone();
        self.apply_to(&mut next);
        next
    }
}

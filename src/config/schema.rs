//! The versioned site-configuration schema.
//!
//! [`SiteConfig`] is the root aggregate of every presentation-affecting
//! setting: layout, theme, feature flags, header behavior, hero, headings,
//! style package and editor state. The wire format is camelCase JSON so
//! documents written by earlier releases parse unchanged.
//!
//! Every enum field goes through a validated parse at the storage boundary:
//! an unknown or tampered value falls back to the field's documented default
//! instead of failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::constants::CONFIG_VERSION;

/// Closed set of values accepted for one configuration field.
///
/// Centralizes the "unknown value falls back to the default" rule so the
/// storage boundary, the legacy migration, and the CLI all coerce raw
/// strings the same way.
pub trait ConfigEnum: Copy + Default + Sized {
    /// Field name used in log messages.
    const FIELD: &'static str;

    /// Parses the canonical (or legacy alias) spelling of a value.
    fn parse(raw: &str) -> Option<Self>;

    /// Canonical spelling of this value.
    fn as_str(self) -> &'static str;

    /// Parses `raw`, falling back to the documented default on anything
    /// unrecognized.
    fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            debug!(
                field = Self::FIELD,
                value = raw,
                "Unknown configuration value, using default"
            );
            Self::default()
        })
    }

    /// All canonical values, for CLI help and validation messages.
    fn all() -> &'static [Self];
}

/// Serde adapter: deserialize a string field through [`ConfigEnum::parse_or_default`].
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ConfigEnum,
{
    let raw = String::deserialize(deserializer)?;
    Ok(T::parse_or_default(&raw))
}

/// Serde adapter for optional enum fields.
pub(crate) fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ConfigEnum,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|r| T::parse_or_default(&r)))
}

/// Whether the site renders as one long page or as separate routed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// All sections on a single scrolling page
    #[default]
    Onepage,
    /// Separate pages with routed navigation
    Multipage,
}

impl ConfigEnum for LayoutMode {
    const FIELD: &'static str = "layout.mode";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "onepage" => Some(Self::Onepage),
            "multipage" => Some(Self::Multipage),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Onepage => "onepage",
            Self::Multipage => "multipage",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Onepage, Self::Multipage]
    }
}

/// Named visual treatment driving header shape, spacing and resolver output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    /// Sharp corners, hard shadows, uppercase calls to action
    #[default]
    Angular,
    /// Soft corners and gentle shadows
    Rounded,
    /// Large radii, blur and gradients
    Modern,
    /// Traditional serif-leaning treatment
    Klassik,
}

impl ConfigEnum for DesignStyle {
    const FIELD: &'static str = "layout.design";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "angular" => Some(Self::Angular),
            "rounded" => Some(Self::Rounded),
            "modern" => Some(Self::Modern),
            "klassik" => Some(Self::Klassik),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::Rounded => "rounded",
            Self::Modern => "modern",
            Self::Klassik => "klassik",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Angular, Self::Rounded, Self::Modern, Self::Klassik]
    }
}

/// Feature tier of the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Minimal section set
    #[default]
    Starter,
    /// Full section set
    Professional,
    /// Full section set plus premium visuals
    Premium,
}

impl ConfigEnum for LayoutVariant {
    const FIELD: &'static str = "layout.variant";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "starter" => Some(Self::Starter),
            "professional" => Some(Self::Professional),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Premium => "premium",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Starter, Self::Professional, Self::Premium]
    }
}

/// Named color scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Amber and terracotta tones
    #[default]
    Warm,
    /// Blue and slate tones
    Modern,
    /// Charcoal and gold tones
    Elegant,
    /// Green and earth tones
    Nature,
}

impl ConfigEnum for ColorScheme {
    const FIELD: &'static str = "theme.colorScheme";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "warm" => Some(Self::Warm),
            "modern" => Some(Self::Modern),
            "elegant" => Some(Self::Elegant),
            "nature" => Some(Self::Nature),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Modern => "modern",
            Self::Elegant => "elegant",
            Self::Nature => "nature",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Warm, Self::Modern, Self::Elegant, Self::Nature]
    }
}

/// Which header implementation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
    /// Desktop header only
    Desktop,
    /// Mobile header only
    Mobile,
    /// Switches on viewport width
    #[default]
    Adaptive,
}

impl ConfigEnum for HeaderVariant {
    const FIELD: &'static str = "header.variant";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            "adaptive" => Some(Self::Adaptive),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Adaptive => "adaptive",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Desktop, Self::Mobile, Self::Adaptive]
    }
}

/// Presentation of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MobileMenuType {
    /// Overlay covering the whole viewport
    #[default]
    Fullscreen,
    /// Slide-in panel from the edge
    Sidebar,
    /// Dropdown below the header bar
    Dropdown,
}

impl ConfigEnum for MobileMenuType {
    const FIELD: &'static str = "header.navigation.mobileType";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "fullscreen" => Some(Self::Fullscreen),
            "sidebar" => Some(Self::Sidebar),
            "dropdown" => Some(Self::Dropdown),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Sidebar => "sidebar",
            Self::Dropdown => "dropdown",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Fullscreen, Self::Sidebar, Self::Dropdown]
    }
}

/// Hero section variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeroType {
    /// One static image
    #[default]
    Single,
    /// Rotating image slider
    Slider,
    /// Background video
    Video,
    /// Split text/image layout
    Split,
}

impl ConfigEnum for HeroType {
    const FIELD: &'static str = "hero.type";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "single" => Some(Self::Single),
            "slider" => Some(Self::Slider),
            "video" => Some(Self::Video),
            "split" => Some(Self::Split),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Slider => "slider",
            Self::Video => "video",
            Self::Split => "split",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Single, Self::Slider, Self::Video, Self::Split]
    }
}

/// Decoration drawn under section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// Solid underline bar
    #[default]
    Solid,
    /// No decoration
    None,
    /// Gradient underline bar
    Gradient,
    /// Dotted underline
    Dotted,
}

impl ConfigEnum for HeadingStyle {
    const FIELD: &'static str = "headings.style";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "solid" => Some(Self::Solid),
            "none" => Some(Self::None),
            "gradient" => Some(Self::Gradient),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::None => "none",
            Self::Gradient => "gradient",
            Self::Dotted => "dotted",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Solid, Self::None, Self::Gradient, Self::Dotted]
    }
}

/// Color role used for heading decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadingColor {
    /// Primary brand color
    #[default]
    Primary,
    /// Secondary brand color
    Secondary,
    /// Accent color
    Accent,
    /// Custom color supplied by the page
    Custom,
}

impl ConfigEnum for HeadingColor {
    const FIELD: &'static str = "headings.color";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "accent" => Some(Self::Accent),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Custom => "custom",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Primary, Self::Secondary, Self::Accent, Self::Custom]
    }
}

/// Identifier of a style package (preset bundle).
///
/// The pre-rename english ids (`simple`, `classic`) are accepted as parse
/// aliases so stored documents from those releases keep their choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StylePackage {
    /// Reduced, quiet treatment
    Einfach,
    /// Balanced default treatment
    #[default]
    Standard,
    /// Expressive treatment with gradients
    Modern,
}

impl ConfigEnum for StylePackage {
    const FIELD: &'static str = "style.package";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "einfach" | "simple" => Some(Self::Einfach),
            "standard" | "classic" => Some(Self::Standard),
            "modern" => Some(Self::Modern),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Einfach => "einfach",
            Self::Standard => "standard",
            Self::Modern => "modern",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Einfach, Self::Standard, Self::Modern]
    }
}

/// Font family category of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Sans-serif body font
    #[default]
    Sans,
    /// Serif body font
    Serif,
    /// Monospaced font
    Mono,
    /// Display font for an expressive look
    Display,
}

impl ConfigEnum for FontFamily {
    const FIELD: &'static str = "style.fontFamily";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sans" => Some(Self::Sans),
            "serif" => Some(Self::Serif),
            "mono" => Some(Self::Mono),
            "display" => Some(Self::Display),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
            Self::Display => "display",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Sans, Self::Serif, Self::Mono, Self::Display]
    }
}

/// Shape of badges (service tags, "24h Notdienst" chips, trust marks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    /// Text only, no chrome
    Minimal,
    /// Soft-cornered chip
    #[default]
    Rounded,
    /// Fully rounded pill
    Pill,
    /// Outlined chip without fill
    Outlined,
    /// Gradient-filled chip
    Gradient,
    /// Badges hidden entirely
    None,
}

impl ConfigEnum for BadgeStyle {
    const FIELD: &'static str = "style.badgeStyle";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "minimal" => Some(Self::Minimal),
            "rounded" => Some(Self::Rounded),
            "pill" => Some(Self::Pill),
            "outlined" => Some(Self::Outlined),
            "gradient" => Some(Self::Gradient),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Rounded => "rounded",
            Self::Pill => "pill",
            Self::Outlined => "outlined",
            Self::Gradient => "gradient",
            Self::None => "none",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Minimal,
            Self::Rounded,
            Self::Pill,
            Self::Outlined,
            Self::Gradient,
            Self::None,
        ]
    }
}

/// Vertical rhythm between sections and elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpacingScale {
    /// Tight spacing
    Compact,
    /// Default spacing
    #[default]
    Comfortable,
    /// Generous spacing
    Spacious,
}

impl ConfigEnum for SpacingScale {
    const FIELD: &'static str = "style.spacing";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "compact" => Some(Self::Compact),
            "comfortable" => Some(Self::Comfortable),
            "spacious" => Some(Self::Spacious),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
            Self::Spacious => "spacious",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Compact, Self::Comfortable, Self::Spacious]
    }
}

/// Border-radius scale, overriding what the design style implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RadiusScale {
    /// Square corners
    None,
    /// Barely rounded
    Subtle,
    /// Default rounding
    #[default]
    Medium,
    /// Strong rounding
    Large,
}

impl ConfigEnum for RadiusScale {
    const FIELD: &'static str = "style.borderRadius";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "subtle" => Some(Self::Subtle),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::None, Self::Subtle, Self::Medium, Self::Large]
    }
}

/// Tab last active in the quick-edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    /// Layout mode and variant
    #[default]
    Layout,
    /// Design style
    Design,
    /// Color scheme
    Color,
    /// Feature toggles
    Features,
}

impl ConfigEnum for EditorTab {
    const FIELD: &'static str = "system.activeTab";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "layout" => Some(Self::Layout),
            "design" => Some(Self::Design),
            "color" => Some(Self::Color),
            "features" => Some(Self::Features),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Design => "design",
            Self::Color => "color",
            Self::Features => "features",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Layout, Self::Design, Self::Color, Self::Features]
    }
}

/// Page structure settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// One-page or multi-page site
    #[serde(deserialize_with = "lenient")]
    pub mode: LayoutMode,
    /// Visual design style
    #[serde(deserialize_with = "lenient")]
    pub design: DesignStyle,
    /// Feature tier
    #[serde(deserialize_with = "lenient")]
    pub variant: LayoutVariant,
}

/// Color and dark-mode settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Named color scheme
    #[serde(deserialize_with = "lenient")]
    pub color_scheme: ColorScheme,
    /// Dark mode on/off
    pub dark_mode: bool,
}

/// Independently toggleable site features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    /// Contact bar above the header
    pub contact_bar: bool,
    /// Floating side contact button
    pub side_contact: bool,
    /// Sticky mobile contact bar
    pub mobile_contact: bool,
    /// Opening-hours / status banner
    pub status_info: bool,
    /// WhatsApp chat entry point
    pub whatsapp: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            contact_bar: true,
            side_contact: true,
            mobile_contact: true,
            status_info: true,
            whatsapp: false,
        }
    }
}

/// Scroll and overlay behavior of the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderBehavior {
    /// Hide the header while scrolling down
    pub hide_on_scroll: bool,
    /// Detach the header from the page edge
    pub floating: bool,
    /// Transparent until scrolled
    pub transparent: bool,
}

/// Navigation elements shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderNavigation {
    /// Show the company logo
    pub show_logo: bool,
    /// Show the call-to-action button
    pub show_cta: bool,
    /// Show the mobile menu toggle
    pub show_mobile_menu: bool,
    /// Mobile menu presentation
    #[serde(deserialize_with = "lenient")]
    pub mobile_type: MobileMenuType,
}

impl Default for HeaderNavigation {
    fn default() -> Self {
        Self {
            show_logo: true,
            show_cta: true,
            show_mobile_menu: true,
            mobile_type: MobileMenuType::default(),
        }
    }
}

/// Header settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    /// Which header implementation renders
    #[serde(deserialize_with = "lenient")]
    pub variant: HeaderVariant,
    /// Scroll and overlay behavior
    pub behavior: HeaderBehavior,
    /// Navigation elements
    pub navigation: HeaderNavigation,
}

/// Hero section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroConfig {
    /// Hero variant
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub hero_type: HeroType,
}

/// Section heading decoration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingConfig {
    /// Draw a decoration under headings
    pub underline: bool,
    /// Decoration style
    #[serde(deserialize_with = "lenient")]
    pub style: HeadingStyle,
    /// Decoration color role
    #[serde(deserialize_with = "lenient")]
    pub color: HeadingColor,
    /// Render heading text with a gradient fill
    pub gradient: bool,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            underline: true,
            style: HeadingStyle::default(),
            color: HeadingColor::default(),
            gradient: false,
        }
    }
}

/// Typography, badge and spacing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Active style package
    #[serde(deserialize_with = "lenient")]
    pub package: StylePackage,
    /// Font family category
    #[serde(deserialize_with = "lenient")]
    pub font_family: FontFamily,
    /// Badge shape
    #[serde(deserialize_with = "lenient")]
    pub badge_style: BadgeStyle,
    /// Vertical rhythm
    #[serde(deserialize_with = "lenient")]
    pub spacing: SpacingScale,
    /// Explicit radius override; `None` means the design style decides
    #[serde(
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<RadiusScale>,
    /// Explicit border override; `None` means the design style decides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<bool>,
}

/// Session and editor bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemState {
    /// No configuration existed when the store loaded
    pub is_first_visit: bool,
    /// Quick-edit panel enabled
    pub quick_edit_mode: bool,
    /// Last active quick-edit tab
    #[serde(deserialize_with = "lenient")]
    pub active_tab: EditorTab,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            is_first_visit: true,
            quick_edit_mode: false,
            active_tab: EditorTab::default(),
        }
    }
}

/// The versioned root aggregate of all presentation settings.
///
/// Constructed once at store initialization and mutated only through the
/// store's update and reset operations. Documents with a missing or
/// mismatched `version` never merge directly; they go through legacy
/// migration instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Schema version tag of the persisted document; a document without
    /// one is never treated as current
    #[serde(default)]
    pub version: String,
    /// Page structure
    pub layout: LayoutConfig,
    /// Colors and dark mode
    pub theme: ThemeConfig,
    /// Feature toggles
    pub features: FeatureFlags,
    /// Header settings
    pub header: HeaderConfig,
    /// Hero settings
    pub hero: HeroConfig,
    /// Heading decoration
    pub headings: HeadingConfig,
    /// Typography and badges
    pub style: StyleConfig,
    /// Session bookkeeping
    pub system: SystemState,
}

impl SiteConfig {
    /// Creates the compiled-in default configuration.
    ///
    /// Every call returns a fresh copy; resets must never hand out a
    /// shared reference.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
            features: FeatureFlags::default(),
            header: HeaderConfig::default(),
            hero: HeroConfig::default(),
            headings: HeadingConfig::default(),
            style: StyleConfig::default(),
            system: SystemState::default(),
        }
    }

    /// True if the version tag matches the current schema version.
    #[must_use]
    pub fn is_current_version(&self) -> bool {
        self.version == CONFIG_VERSION
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::cli::common::{CliError, CliResult};
use crate::config::{
    BadgeStyle, ColorScheme, ConfigEnum, ConfigPatch, ConfigStore, DesignStyle, FeaturePatch,
    FontFamily, HeadingPatch, HeadingStyle, HeroPatch, HeroType, LayoutMode, LayoutPatch,
    LayoutVariant, SpacingScale, StylePatch, ThemePatch,
};
use crate::storage::FileStorage;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Reset configuration to compiled-in defaults
    Reset(ConfigResetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Layout mode (onepage or multipage)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Design style (angular, rounded, modern, or klassik)
    #[arg(long, value_name = "STYLE")]
    design: Option<String>,

    /// Feature tier (starter, professional, or premium)
    #[arg(long, value_name = "TIER")]
    variant: Option<String>,

    /// Color scheme (warm, modern, elegant, or nature)
    #[arg(long, value_name = "SCHEME")]
    color_scheme: Option<String>,

    /// Dark mode (auto, on, or off); auto detects the OS theme
    #[arg(long, value_name = "MODE")]
    dark_mode: Option<String>,

    /// Hero variant (single, slider, video, or split)
    #[arg(long, value_name = "TYPE")]
    hero: Option<String>,

    /// Heading decoration style (solid, none, gradient, or dotted)
    #[arg(long, value_name = "STYLE")]
    heading_style: Option<String>,

    /// Font family (sans, serif, mono, or display)
    #[arg(long, value_name = "FAMILY")]
    font: Option<String>,

    /// Badge shape (minimal, rounded, pill, outlined, gradient, or none)
    #[arg(long, value_name = "SHAPE")]
    badge: Option<String>,

    /// Spacing scale (compact, comfortable, or spacious)
    #[arg(long, value_name = "SCALE")]
    spacing: Option<String>,

    /// Enable a feature (contact-bar, side-contact, mobile-contact, status-info, whatsapp)
    #[arg(long, value_name = "FEATURE")]
    enable: Vec<String>,

    /// Disable a feature (same names as --enable)
    #[arg(long, value_name = "FEATURE")]
    disable: Vec<String>,
}

/// Reset configuration to compiled-in defaults
#[derive(Args, Debug)]
pub struct ConfigResetArgs {
    /// Skip the confirmation requirement
    #[arg(long)]
    yes: bool,
}

/// Opens the configuration store over the default file storage.
pub fn open_store() -> CliResult<ConfigStore> {
    let storage = FileStorage::open_default()
        .map_err(|e| CliError::io(format!("Failed to open settings storage: {e}")))?;
    Ok(ConfigStore::open(Box::new(storage)))
}

/// Strict value parsing for CLI input: unknown values are an error here,
/// not a silent fallback like at the storage boundary.
fn parse_strict<T: ConfigEnum + 'static>(raw: &str) -> CliResult<T> {
    let lowered = raw.to_lowercase();
    T::parse(&lowered).ok_or_else(|| {
        let valid: Vec<&str> = T::all().iter().map(|v| v.as_str()).collect();
        CliError::validation(format!(
            "Invalid value '{raw}' for {}. Valid values: {}",
            T::FIELD,
            valid.join(", ")
        ))
    })
}

fn feature_flag(patch: &mut FeaturePatch, name: &str, value: bool) -> CliResult<()> {
    match name {
        "contact-bar" => patch.contact_bar = Some(value),
        "side-contact" => patch.side_contact = Some(value),
        "mobile-contact" => patch.mobile_contact = Some(value),
        "status-info" => patch.status_info = Some(value),
        "whatsapp" => patch.whatsapp = Some(value),
        _ => {
            return Err(CliError::validation(format!(
                "Unknown feature '{name}'. Valid features: contact-bar, side-contact, \
                 mobile-contact, status-info, whatsapp"
            )))
        }
    }
    Ok(())
}

/// Resolves `--dark-mode auto|on|off` to a concrete flag.
fn resolve_dark_mode(raw: &str) -> CliResult<bool> {
    match raw.to_lowercase().as_str() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        "auto" => Ok(matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))),
        _ => Err(CliError::validation(
            "Invalid dark mode value. Must be 'auto', 'on', or 'off'",
        )),
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Reset(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store()?;

        if self.json {
            let json = serde_json::to_string_pretty(&store.config())
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&store);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let patch = self.build_patch()?;
        if patch.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified; see 'config set --help'",
            ));
        }

        let mut store = open_store()?;
        store.update(&patch);

        println!("Configuration updated.");
        println!("Active style marker: {}", store.style_marker().class_string());
        Ok(())
    }

    fn build_patch(&self) -> CliResult<ConfigPatch> {
        let mut patch = ConfigPatch::default();

        let mut layout = LayoutPatch::default();
        if let Some(raw) = &self.mode {
            layout.mode = Some(parse_strict::<LayoutMode>(raw)?);
        }
        if let Some(raw) = &self.design {
            layout.design = Some(parse_strict::<DesignStyle>(raw)?);
        }
        if let Some(raw) = &self.variant {
            layout.variant = Some(parse_strict::<LayoutVariant>(raw)?);
        }
        if layout != LayoutPatch::default() {
            patch.layout = Some(layout);
        }

        let mut theme = ThemePatch::default();
        if let Some(raw) = &self.color_scheme {
            theme.color_scheme = Some(parse_strict::<ColorScheme>(raw)?);
        }
        if let Some(raw) = &self.dark_mode {
            theme.dark_mode = Some(resolve_dark_mode(raw)?);
        }
        if theme != ThemePatch::default() {
            patch.theme = Some(theme);
        }

        if let Some(raw) = &self.hero {
            patch.hero = Some(HeroPatch {
                hero_type: Some(parse_strict::<HeroType>(raw)?),
            });
        }

        if let Some(raw) = &self.heading_style {
            let style = parse_strict::<HeadingStyle>(raw)?;
            patch.headings = Some(HeadingPatch {
                style: Some(style),
                underline: Some(style != HeadingStyle::None),
                ..HeadingPatch::default()
            });
        }

        let mut style = StylePatch::default();
        if let Some(raw) = &self.font {
            style.font_family = Some(parse_strict::<FontFamily>(raw)?);
        }
        if let Some(raw) = &self.badge {
            style.badge_style = Some(parse_strict::<BadgeStyle>(raw)?);
        }
        if let Some(raw) = &self.spacing {
            style.spacing = Some(parse_strict::<SpacingScale>(raw)?);
        }
        if style != StylePatch::default() {
            patch.style = Some(style);
        }

        let mut features = FeaturePatch::default();
        for name in &self.enable {
            feature_flag(&mut features, name, true)?;
        }
        for name in &self.disable {
            feature_flag(&mut features, name, false)?;
        }
        if features != FeaturePatch::default() {
            patch.features = Some(features);
        }

        Ok(patch)
    }
}

impl ConfigResetArgs {
    /// Execute reset command
    pub fn execute(&self) -> CliResult<()> {
        if !self.yes {
            return Err(CliError::validation(
                "Resetting discards all configuration changes; pass --yes to confirm",
            ));
        }

        let mut store = open_store()?;
        store.reset_to_defaults();
        println!("Configuration reset to defaults.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn print_human_readable(store: &ConfigStore) {
    let config = store.config();

    println!("Werksite Configuration");
    println!("======================");
    println!();

    println!("Layout:");
    println!("  Mode: {}", config.layout.mode.as_str());
    println!("  Design: {}", config.layout.design.as_str());
    println!("  Variant: {}", config.layout.variant.as_str());
    println!();

    println!("Theme:");
    println!("  Color Scheme: {}", config.theme.color_scheme.as_str());
    println!("  Dark Mode: {}", on_off(config.theme.dark_mode));
    println!();

    println!("Features:");
    println!("  Contact Bar: {}", on_off(config.features.contact_bar));
    println!("  Side Contact: {}", on_off(config.features.side_contact));
    println!("  Mobile Contact: {}", on_off(config.features.mobile_contact));
    println!("  Status Info: {}", on_off(config.features.status_info));
    println!("  WhatsApp: {}", on_off(config.features.whatsapp));
    println!();

    println!("Header:");
    println!("  Variant: {}", config.header.variant.as_str());
    println!(
        "  Mobile Menu: {}",
        config.header.navigation.mobile_type.as_str()
    );
    println!();

    println!("Hero:");
    println!("  Type: {}", config.hero.hero_type.as_str());
    println!();

    println!("Style:");
    println!("  Package: {}", config.style.package.as_str());
    println!("  Font: {}", config.style.font_family.as_str());
    println!("  Badges: {}", config.style.badge_style.as_str());
    println!("  Spacing: {}", config.style.spacing.as_str());
    println!();

    println!("Style Marker: {}", store.style_marker().class_string());
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strict_accepts_mixed_case() {
        assert_eq!(
            parse_strict::<DesignStyle>("Modern").unwrap(),
            DesignStyle::Modern
        );
    }

    #[test]
    fn test_parse_strict_rejects_unknown_with_valid_list() {
        let err = parse_strict::<DesignStyle>("brutalist").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("brutalist"));
        assert!(message.contains("angular"));
        assert!(message.contains("klassik"));
    }

    #[test]
    fn test_feature_flag_names() {
        let mut patch = FeaturePatch::default();
        feature_flag(&mut patch, "whatsapp", true).unwrap();
        assert_eq!(patch.whatsapp, Some(true));
        assert!(feature_flag(&mut patch, "jacuzzi", true).is_err());
    }

    #[test]
    fn test_resolve_dark_mode_explicit_values() {
        assert!(resolve_dark_mode("on").unwrap());
        assert!(!resolve_dark_mode("off").unwrap());
        assert!(resolve_dark_mode("sepia").is_err());
    }
}

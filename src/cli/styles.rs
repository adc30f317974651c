//! Resolved-style inspection CLI command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::cli::config::open_store;
use crate::config::{ConfigEnum, DesignStyle};
use crate::styles;

/// Print the resolved style descriptors for the active configuration
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Resolve for this design style instead of the stored one
    #[arg(long, value_name = "STYLE")]
    design: Option<String>,

    /// Resolve the scrolled header state instead of the top-of-page state
    #[arg(long)]
    scrolled: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct StylesOutput {
    marker: String,
    header: HeaderOutput,
    dropdown: DropdownOutput,
    palette: PaletteOutput,
    cta: CtaOutput,
    unified: UnifiedOutput,
}

#[derive(Serialize, Debug)]
struct HeaderOutput {
    classes: String,
    background: &'static str,
    backdrop_filter: &'static str,
    box_shadow: &'static str,
    border_bottom: &'static str,
    border_radius: &'static str,
    transform: &'static str,
    transition: &'static str,
}

#[derive(Serialize, Debug)]
struct DropdownOutput {
    classes: String,
    border_radius: &'static str,
    box_shadow: &'static str,
    background: &'static str,
    border: &'static str,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    surface: &'static str,
    text: &'static str,
    muted: &'static str,
}

#[derive(Serialize, Debug)]
struct CtaOutput {
    classes: String,
    text_transform: &'static str,
    font_weight: &'static str,
    border_radius: &'static str,
}

#[derive(Serialize, Debug)]
struct UnifiedOutput {
    design: &'static str,
    radius: &'static str,
    shadow: String,
    badge: &'static str,
    transitions: String,
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store()?;
        let config = store.config();

        // The override is lenient like the storage boundary: an unknown
        // raw value resolves as the angular default rather than erroring,
        // so scripts can probe arbitrary stored values safely.
        let design = match &self.design {
            Some(raw) => DesignStyle::parse_or_default(&raw.to_lowercase()),
            None => config.layout.design,
        };

        let header = styles::header::resolve(design, self.scrolled, true);
        let dropdown = styles::dropdown::resolve(design, self.scrolled);
        let palette = styles::colors::resolve(config.theme.color_scheme, config.theme.dark_mode);
        let cta = styles::cta::resolve(design);
        let unified = styles::unified::resolve(config.style.package);

        let output = StylesOutput {
            marker: store.style_marker().class_string(),
            header: HeaderOutput {
                classes: header.classes,
                background: header.background,
                backdrop_filter: header.backdrop_filter,
                box_shadow: header.box_shadow,
                border_bottom: header.border_bottom,
                border_radius: header.border_radius,
                transform: header.transform,
                transition: header.transition,
            },
            dropdown: DropdownOutput {
                classes: dropdown.classes,
                border_radius: dropdown.border_radius,
                box_shadow: dropdown.box_shadow,
                background: dropdown.background,
                border: dropdown.border,
            },
            palette: PaletteOutput {
                primary: palette.primary,
                secondary: palette.secondary,
                accent: palette.accent,
                background: palette.background,
                surface: palette.surface,
                text: palette.text,
                muted: palette.muted,
            },
            cta: CtaOutput {
                classes: cta.classes,
                text_transform: cta.casing.css_value(),
                font_weight: cta.font_weight,
                border_radius: cta.border_radius,
            },
            unified: UnifiedOutput {
                design: unified.design.as_str(),
                radius: unified.radius.as_str(),
                shadow: format!("{:?}", unified.shadow).to_lowercase(),
                badge: unified.badge.as_str(),
                transitions: format!("{:?}", unified.transitions).to_lowercase(),
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize styles: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(design, self.scrolled, &output);
        }

        Ok(())
    }
}

fn print_human_readable(design: DesignStyle, scrolled: bool, output: &StylesOutput) {
    println!(
        "Resolved styles for design '{}' ({})",
        design.as_str(),
        if scrolled { "scrolled" } else { "top of page" }
    );
    println!();
    println!("Marker: {}", output.marker);
    println!();
    println!("Header:");
    println!("  Classes: {}", output.header.classes);
    println!("  Background: {}", output.header.background);
    println!("  Shadow: {}", output.header.box_shadow);
    println!("  Radius: {}", output.header.border_radius);
    println!();
    println!("Dropdown:");
    println!("  Classes: {}", output.dropdown.classes);
    println!("  Radius: {}", output.dropdown.border_radius);
    println!("  Shadow: {}", output.dropdown.box_shadow);
    println!();
    println!("Palette:");
    println!("  Primary: {}", output.palette.primary);
    println!("  Accent: {}", output.palette.accent);
    println!("  Background: {}", output.palette.background);
    println!("  Text: {}", output.palette.text);
    println!();
    println!("CTA:");
    println!("  Classes: {}", output.cta.classes);
    println!("  Text Transform: {}", output.cta.text_transform);
    println!("  Weight: {}", output.cta.font_weight);
    println!();
    println!("Unified Package:");
    println!("  Design: {}", output.unified.design);
    println!("  Radius: {}", output.unified.radius);
    println!("  Shadow: {}", output.unified.shadow);
    println!("  Badge: {}", output.unified.badge);
    println!("  Transitions: {}", output.unified.transitions);
}

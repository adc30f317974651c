//! Style preset CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::cli::config::open_store;
use crate::config::presets::{self, StylePreset};
use crate::config::ConfigEnum;

/// Style preset commands
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// List all available presets
    List(PresetListArgs),
    /// Show one preset in detail
    Show(PresetShowArgs),
    /// Apply a preset to the current configuration
    Apply(PresetApplyArgs),
}

/// List all available presets
#[derive(Args, Debug)]
pub struct PresetListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one preset in detail
#[derive(Args, Debug)]
pub struct PresetShowArgs {
    /// Preset id (einfach, standard, or modern)
    #[arg(value_name = "ID")]
    id: String,
}

/// Apply a preset to the current configuration
#[derive(Args, Debug)]
pub struct PresetApplyArgs {
    /// Preset id (einfach, standard, or modern)
    #[arg(value_name = "ID")]
    id: String,
}

/// JSON-serializable preset summary for output
#[derive(Serialize, Debug)]
struct PresetOutput {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    design: &'static str,
    font_family: &'static str,
    badge_style: &'static str,
    spacing: &'static str,
    underline: bool,
    gradient: bool,
}

impl From<&StylePreset> for PresetOutput {
    fn from(preset: &StylePreset) -> Self {
        Self {
            id: preset.id.as_str(),
            name: preset.name,
            description: preset.description,
            design: preset.design.as_str(),
            font_family: preset.font_family.as_str(),
            badge_style: preset.badge_style.as_str(),
            spacing: preset.spacing.as_str(),
            underline: preset.underline,
            gradient: preset.gradient,
        }
    }
}

impl PresetArgs {
    /// Execute preset subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetCommand::List(args) => args.execute(),
            PresetCommand::Show(args) => args.execute(),
            PresetCommand::Apply(args) => args.execute(),
        }
    }
}

impl PresetListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let output: Vec<PresetOutput> =
                presets::catalog().iter().map(PresetOutput::from).collect();
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize presets: {e}")))?;
            println!("{json}");
        } else {
            println!("Available style presets:");
            println!();
            for preset in presets::catalog() {
                println!(
                    "  {} {} ({}) - {}",
                    preset.icon,
                    preset.name,
                    preset.id.as_str(),
                    preset.description
                );
            }
        }
        Ok(())
    }
}

impl PresetShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let preset = presets::find(&self.id)
            .ok_or_else(|| CliError::validation(format!("Unknown preset '{}'", self.id)))?;

        println!("{} {} ({})", preset.icon, preset.name, preset.id.as_str());
        println!("{}", preset.description);
        println!();
        println!("  Design: {}", preset.design.as_str());
        println!("  Font: {}", preset.font_family.as_str());
        println!("  Badges: {}", preset.badge_style.as_str());
        println!("  Spacing: {}", preset.spacing.as_str());
        println!("  Heading Underline: {}", preset.underline || preset.gradient);
        println!("  Heading Gradient: {}", preset.gradient);
        Ok(())
    }
}

impl PresetApplyArgs {
    /// Execute apply command
    pub fn execute(&self) -> CliResult<()> {
        // Unknown ids are validated up front: inside the library they are
        // a silent no-op, but the CLI user gets told.
        let preset = presets::find(&self.id)
            .ok_or_else(|| CliError::validation(format!("Unknown preset '{}'", self.id)))?;

        let mut store = open_store()?;
        store.update(&preset.as_patch());

        println!("Applied preset '{}'.", preset.name);
        println!("Active style marker: {}", store.style_marker().class_string());
        Ok(())
    }
}

//! Storage diagnostics command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::config::migration::ALL_LEGACY_KEYS;
use crate::config::SiteConfig;
use crate::constants::{CONFIG_STORAGE_KEY, CONFIG_VERSION};
use crate::storage::{settings_dir, FileStorage, SettingsStorage};

/// Check the settings storage and report its state
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output results as JSON
    #[arg(long)]
    json: bool,
}

/// Parse state of the primary configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum DocumentState {
    /// No document stored
    Absent,
    /// Parses and carries the current version tag
    Current,
    /// Parses but carries a stale version tag
    Stale,
    /// Does not parse as JSON
    Corrupt,
}

#[derive(Serialize, Debug)]
struct DoctorOutput {
    settings_dir: String,
    storage_file_exists: bool,
    document: DocumentState,
    stored_version: Option<String>,
    expected_version: &'static str,
    legacy_keys_present: Vec<&'static str>,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        let dir = settings_dir()
            .map_err(|e| CliError::io(format!("Failed to determine settings directory: {e}")))?;
        let storage = FileStorage::open_default()
            .map_err(|e| CliError::io(format!("Failed to open settings storage: {e}")))?;

        let (document, stored_version) = match storage.get(CONFIG_STORAGE_KEY) {
            None => (DocumentState::Absent, None),
            Some(raw) => match serde_json::from_str::<SiteConfig>(&raw) {
                Ok(config) if config.is_current_version() => {
                    (DocumentState::Current, Some(config.version))
                }
                Ok(config) => (DocumentState::Stale, Some(config.version)),
                Err(_) => (DocumentState::Corrupt, None),
            },
        };

        let legacy_keys_present: Vec<&'static str> = ALL_LEGACY_KEYS
            .iter()
            .copied()
            .filter(|key| storage.get(key).is_some())
            .collect();

        let output = DoctorOutput {
            settings_dir: dir.display().to_string(),
            storage_file_exists: storage.path().exists(),
            document,
            stored_version,
            expected_version: CONFIG_VERSION,
            legacy_keys_present,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize diagnostics: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&output);
        }

        // Corrupt storage is worth a failing exit code so scripts notice;
        // stale and absent documents are normal states the loader handles.
        if output.document == DocumentState::Corrupt {
            return Err(CliError::validation(
                "Stored configuration document is corrupt",
            ));
        }
        Ok(())
    }
}

fn print_human_readable(output: &DoctorOutput) {
    println!("Werksite Storage Diagnostics");
    println!("============================");
    println!();
    println!("Settings directory: {}", output.settings_dir);
    println!(
        "Storage file: {}",
        if output.storage_file_exists {
            "present"
        } else {
            "absent"
        }
    );
    println!("Configuration document: {:?}", output.document);
    match &output.stored_version {
        Some(version) => println!(
            "Version: {} (expected {})",
            version, output.expected_version
        ),
        None => println!("Version: - (expected {})", output.expected_version),
    }
    println!();
    if output.legacy_keys_present.is_empty() {
        println!("No legacy entries present.");
    } else {
        println!("Legacy entries present:");
        for key in &output.legacy_keys_present {
            println!("  {key}");
        }
    }
}

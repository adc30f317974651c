//! Legacy migration and rollback CLI commands.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::cli::config::open_store;
use crate::config::migration::{self, ALL_LEGACY_KEYS};
use crate::config::ConfigPatch;
use crate::storage::{FileStorage, SettingsStorage};

/// Run legacy migration and persist the result
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Report what would be migrated without writing anything
    #[arg(long)]
    dry_run: bool,
}

/// Write the current configuration back into the legacy flat keys
#[derive(Args, Debug)]
pub struct RollbackArgs {}

impl MigrateArgs {
    /// Execute the migrate command
    pub fn execute(&self) -> CliResult<()> {
        let storage = FileStorage::open_default()
            .map_err(|e| CliError::io(format!("Failed to open settings storage: {e}")))?;

        let present: Vec<&str> = ALL_LEGACY_KEYS
            .iter()
            .copied()
            .filter(|key| storage.get(key).is_some())
            .collect();

        if present.is_empty() {
            println!("No legacy entries found; nothing to migrate.");
            return Ok(());
        }

        println!("Legacy entries found:");
        for key in &present {
            if let Some(value) = storage.get(key) {
                println!("  {key} = {value}");
            }
        }
        println!();

        if self.dry_run {
            let config = migration::migrate(&storage);
            println!("Dry run; the migrated configuration would be:");
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        // Opening the store runs the migration when no current-version
        // document exists; the empty update persists the result.
        let mut store = open_store()?;
        store.update(&ConfigPatch::default());
        println!("Migration complete.");
        Ok(())
    }
}

impl RollbackArgs {
    /// Execute the rollback command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;
        store.rollback_to_legacy();
        println!("Configuration written back to legacy keys.");
        Ok(())
    }
}

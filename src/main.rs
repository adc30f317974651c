//! Werksite - configuration tool for generated trade-business websites
//!
//! Operator CLI over the configuration core: show and update the stored
//! site configuration, apply style presets, migrate pre-versioning
//! storage, and inspect resolved style descriptors.

use clap::{Parser, Subcommand};
use werksite::cli::{ConfigArgs, DoctorArgs, MigrateArgs, PresetArgs, RollbackArgs, StylesArgs};
use werksite::constants::APP_NAME;

/// Werksite - site configuration tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show, set, or reset the site configuration
    Config(ConfigArgs),
    /// List, inspect, or apply style presets
    Preset(PresetArgs),
    /// Migrate pre-versioning flat storage entries
    Migrate(MigrateArgs),
    /// Write the configuration back into the legacy keys
    Rollback(RollbackArgs),
    /// Print resolved style descriptors
    Styles(StylesArgs),
    /// Diagnose the settings storage
    Doctor(DoctorArgs),
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Config(args) => args.execute(),
        Command::Preset(args) => args.execute(),
        Command::Migrate(args) => args.execute(),
        Command::Rollback(args) => args.execute(),
        Command::Styles(args) => args.execute(),
        Command::Doctor(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("{APP_NAME}: {e}");
        std::process::exit(e.exit_code() as i32);
    }
}

/// Initializes tracing; `RUST_LOG` controls verbosity, default is warn.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

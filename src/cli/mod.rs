//! CLI command handlers for Werksite.
//!
//! This module provides headless, scriptable access to the configuration
//! core for operators and CI: inspecting and updating the stored
//! configuration, applying presets, running the legacy migration, rolling
//! back, resolving styles, and diagnosing storage state.

pub mod common;
pub mod config;
pub mod doctor;
pub mod migrate;
pub mod preset;
pub mod styles;

// Re-export types used by main.rs
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use doctor::DoctorArgs;
pub use migrate::{MigrateArgs, RollbackArgs};
pub use preset::PresetArgs;
pub use styles::StylesArgs;

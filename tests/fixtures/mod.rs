//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::path::Path;
use std::process::Command;

/// Path to the werksite binary
pub fn werksite_bin() -> String {
    std::env::var("CARGO_BIN_EXE_werksite").unwrap_or_else(|_| "target/release/werksite".to_string())
}

/// Creates a Command with an isolated settings directory.
/// Pass the same directory to share state between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(werksite_bin());
    cmd.env("WERKSITE_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated directory and returns (exit code, stdout, stderr).
pub fn run_isolated(args: &[&str], config_dir: &Path) -> (Option<i32>, String, String) {
    let output = isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Writes raw entries into the isolated storage file, creating it if needed.
pub fn seed_storage(config_dir: &Path, entries: &[(&str, &str)]) {
    let path = config_dir.join("storage.json");
    let map: std::collections::BTreeMap<&str, &str> = entries.iter().copied().collect();
    std::fs::create_dir_all(config_dir).expect("Failed to create config dir");
    std::fs::write(&path, serde_json::to_string_pretty(&map).unwrap())
        .expect("Failed to seed storage");
}

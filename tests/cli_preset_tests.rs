//! End-to-end tests for `werksite preset` commands.

mod fixtures;
use fixtures::run_isolated;
use tempfile::TempDir;

#[test]
fn test_preset_list_contains_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, _) = run_isolated(&["preset", "list"], temp_dir.path());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Einfach"));
    assert!(stdout.contains("Standard"));
    assert!(stdout.contains("Modern"));
}

#[test]
fn test_preset_list_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, _) = run_isolated(&["preset", "list", "--json"], temp_dir.path());

    assert_eq!(code, Some(0));
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let presets = result.as_array().expect("Should be an array");
    assert_eq!(presets.len(), 3);
    assert_eq!(presets[0]["id"], "einfach");
    assert_eq!(presets[1]["id"], "standard");
    assert_eq!(presets[2]["id"], "modern");
    assert_eq!(presets[2]["gradient"], true);
}

#[test]
fn test_preset_show() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, _) = run_isolated(&["preset", "show", "standard"], temp_dir.path());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Standard"));
    assert!(stdout.contains("Design: rounded"));
}

#[test]
fn test_preset_show_accepts_legacy_alias() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, _) = run_isolated(&["preset", "show", "classic"], temp_dir.path());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Standard"));
}

#[test]
fn test_preset_apply_changes_configuration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let (code, stdout, stderr) = run_isolated(&["preset", "apply", "modern"], temp_dir.path());
    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("style-modern"));

    let (_, stdout, _) = run_isolated(&["config", "show", "--json"], temp_dir.path());
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["style"]["package"], "modern");
    assert_eq!(result["layout"]["design"], "modern");
    assert_eq!(result["headings"]["style"], "gradient");
    assert_eq!(result["style"]["fontFamily"], "display");
}

#[test]
fn test_preset_apply_preserves_unrelated_settings() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    run_isolated(&["config", "set", "--dark-mode", "on"], temp_dir.path());
    run_isolated(&["preset", "apply", "einfach"], temp_dir.path());

    let (_, stdout, _) = run_isolated(&["config", "show", "--json"], temp_dir.path());
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["theme"]["darkMode"], true);
    assert_eq!(result["style"]["package"], "einfach");
}

#[test]
fn test_preset_apply_unknown_id_fails_validation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, _, stderr) = run_isolated(&["preset", "apply", "nonexistent"], temp_dir.path());

    assert_eq!(code, Some(1));
    assert!(stderr.contains("nonexistent"));
}

//! End-to-end tests for `werksite styles`.

mod fixtures;
use fixtures::run_isolated;
use tempfile::TempDir;

#[test]
fn test_styles_human_readable_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, stderr) = run_isolated(&["styles"], temp_dir.path());

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("Resolved styles for design 'angular'"));
    assert!(stdout.contains("top of page"));
    assert!(stdout.contains("style-standard design-angular scheme-warm theme-light"));
}

#[test]
fn test_styles_json_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (code, stdout, _) = run_isolated(&["styles", "--json"], temp_dir.path());

    assert_eq!(code, Some(0));
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert!(result["header"]["classes"]
        .as_str()
        .unwrap()
        .contains("site-header"));
    assert!(result["palette"]["primary"].as_str().unwrap().starts_with('#'));
    assert_eq!(result["cta"]["text_transform"], "uppercase");
    assert_eq!(result["unified"]["design"], "rounded");
}

#[test]
fn test_styles_design_override_changes_header_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let (_, base, _) = run_isolated(&["styles", "--json"], temp_dir.path());
    let (_, overridden, _) = run_isolated(
        &["styles", "--design", "modern", "--json"],
        temp_dir.path(),
    );

    let base: serde_json::Value = serde_json::from_str(&base).unwrap();
    let overridden: serde_json::Value = serde_json::from_str(&overridden).unwrap();

    assert_ne!(base["header"]["classes"], overridden["header"]["classes"]);
    // The palette follows the stored scheme, not the design override
    assert_eq!(base["palette"], overridden["palette"]);
}

#[test]
fn test_styles_scrolled_state_differs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let (_, top, _) = run_isolated(&["styles", "--json"], temp_dir.path());
    let (_, scrolled, _) = run_isolated(&["styles", "--scrolled", "--json"], temp_dir.path());

    let top: serde_json::Value = serde_json::from_str(&top).unwrap();
    let scrolled: serde_json::Value = serde_json::from_str(&scrolled).unwrap();
    assert_ne!(top["header"], scrolled["header"]);
}

#[test]
fn test_styles_unknown_design_override_resolves_as_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let (code, stdout, _) = run_isolated(
        &["styles", "--design", "webtrash-3000"],
        temp_dir.path(),
    );
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Resolved styles for design 'angular'"));
}

#[test]
fn test_styles_palette_follows_dark_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let (_, light, _) = run_isolated(&["styles", "--json"], temp_dir.path());
    run_isolated(&["config", "set", "--dark-mode", "on"], temp_dir.path());
    let (_, dark, _) = run_isolated(&["styles", "--json"], temp_dir.path());

    let light: serde_json::Value = serde_json::from_str(&light).unwrap();
    let dark: serde_json::Value = serde_json::from_str(&dark).unwrap();
    assert_ne!(light["palette"]["background"], dark["palette"]["background"]);
    assert!(dark["marker"].as_str().unwrap().contains("theme-dark"));
}

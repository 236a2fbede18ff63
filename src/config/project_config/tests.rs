use super::*;
use tempfile::tempdir;

#[test]
fn test_defaults_match_acf_layout() {
    let config = ProjectConfig::default();
    assert_eq!(config.layout.library_dir, "Include");
    assert_eq!(config.layout.package_dir, "Impl");
    assert_eq!(config.layout.tests_dir, "Tests");
    assert_eq!(config.layout.docs_dir, "Docs");
    assert_eq!(config.scan.large_file_threshold, 1000);
    assert_eq!(config.scan.line_comment_markers, vec!["//", "#"]);
    assert!(config.scan.is_header("h"));
    assert!(!config.scan.is_header("cpp"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    assert_eq!(load_project_config(dir.path()), ProjectConfig::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[layout]
library_dir = "include"

[scan]
large_file_threshold = 500
line_comment_markers = ["//"]
"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.layout.library_dir, "include");
    assert_eq!(config.layout.package_dir, "Impl");
    assert_eq!(config.scan.large_file_threshold, 500);
    assert_eq!(config.scan.line_comment_markers, vec!["//"]);
    assert_eq!(config.scan.source_extensions.len(), 5);
}

#[test]
fn test_malformed_toml_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[scan\nbroken = ").unwrap();
    assert_eq!(load_project_config(dir.path()), ProjectConfig::default());
}

#[test]
fn test_explicit_config_errors_propagate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    assert!(load_toml_config(&path).is_err());

    std::fs::write(&path, "[scan]\nlarge_file_threshold = \"big\"\n").unwrap();
    let err = load_toml_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid TOML"));
}

//! Integration tests for the repostats scanner
//!
//! These tests run the actual binary against a small ACF-shaped tree to verify:
//! - The JSON report has the documented layout
//! - Line counts, groups and declarations are aggregated correctly
//! - Missing directories and unreadable input never fail the run
//!
//! Each test uses its own isolated temp directory.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn repostats_bin() -> &'static str {
    env!("CARGO_BIN_EXE_repostats")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).expect("create parent dirs");
    fs::write(path, content).expect("write fixture file");
}

/// Build a miniature repository with libraries, packages, tests and docs
fn create_test_workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();

    write(
        root,
        "Include/istd/IChangeable.h",
        r#"#pragma once

/**
    Common interface for changeable objects.
*/
class ACF_ISTD_EXPORT IChangeable: public IPolymorphic
{
public:
    // TODO: document change flags
    virtual bool ResetData() = 0;
};
"#,
    );
    write(
        root,
        "Include/istd/CChangeNotifier.cpp",
        "// FIXME: lock order\nvoid Notify()\n{\n}\n",
    );
    write(
        root,
        "Include/icomp/CComponentBase.h",
        "class CComponentBase: public IComponent\n{\n    I_BEGIN_COMPONENT(CComponentBase);\n};\n",
    );
    fs::create_dir_all(root.join("Include/iempty")).unwrap();
    write(root, "Impl/BasePck/CFileNameParam.cpp", &"x = 1;\n".repeat(1001));
    write(root, "Impl/BasePck/readme.txt", "not a source file\n");
    write(root, "Tests/ParamsTest/main.cpp", "int main() { return 0; }\n");
    write(root, "Docs/Overview.md", "# ACF\n");

    dir
}

/// Run repostats on a repo, writing to `out`; returns (stdout, stderr, exit_code)
fn run_scan(repo: &Path, out: &Path) -> (String, String, i32) {
    let output = Command::new(repostats_bin())
        .arg(repo)
        .arg(out)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute repostats binary");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn read_report(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("report written");
    serde_json::from_str(&content).expect("report is valid JSON")
}

// ============================================================================
// Report layout
// ============================================================================

#[test]
fn test_report_has_documented_keys() {
    let workspace = create_test_workspace();
    let out = workspace.path().join("stats.json");

    let (_, stderr, code) = run_scan(workspace.path(), &out);
    assert_eq!(code, 0, "scan should exit 0. stderr: {}", stderr);

    let report = read_report(&out);
    for key in [
        "generated_at",
        "total_files",
        "total_lines",
        "source_files",
        "libraries",
        "packages",
        "components",
        "classes",
        "interfaces",
        "test_files",
        "documentation_files",
        "quality_metrics",
        "summary",
    ] {
        assert!(report.get(key).is_some(), "missing top-level key {}", key);
    }
    for key in ["large_files", "todos", "fixmes", "hacks", "warnings"] {
        assert!(report["quality_metrics"].get(key).is_some(), "missing quality key {}", key);
    }
    assert!(report["generated_at"].as_str().unwrap().contains('T'));
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_report_contents() {
    let workspace = create_test_workspace();
    let out = workspace.path().join("stats.json");
    let (_, stderr, code) = run_scan(workspace.path(), &out);
    assert_eq!(code, 0, "stderr: {}", stderr);
    let report = read_report(&out);

    assert_eq!(report["total_files"], 4);
    assert_eq!(report["test_files"], 1);
    assert_eq!(report["documentation_files"], 1);

    let header = &report["source_files"]["Include/istd/IChangeable.h"];
    assert_eq!(header["category"], "library");
    assert_eq!(header["extension"], ".h");
    let lines = &header["lines"];
    assert_eq!(lines["total"], 11);
    assert_eq!(
        lines["code"].as_u64().unwrap()
            + lines["comment"].as_u64().unwrap()
            + lines["blank"].as_u64().unwrap(),
        11
    );

    let pkg = &report["source_files"]["Impl/BasePck/CFileNameParam.cpp"];
    assert_eq!(pkg["category"], "package");

    assert_eq!(report["libraries"]["istd"]["file_count"], 2);
    assert_eq!(report["libraries"]["icomp"]["file_count"], 1);
    assert_eq!(report["libraries"]["iempty"]["file_count"], 0);
    assert_eq!(report["packages"]["BasePck"]["total_lines"], 1001);

    let classes = report["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert!(classes
        .iter()
        .any(|c| c["name"] == "IChangeable" && c["base"] == "IPolymorphic"));
    assert_eq!(report["interfaces"][0]["name"], "IChangeable");
    assert_eq!(report["components"][0]["name"], "CComponentBase");

    let large = report["quality_metrics"]["large_files"].as_array().unwrap();
    assert_eq!(large.len(), 1);
    assert_eq!(large[0]["file"], "Impl/BasePck/CFileNameParam.cpp");
    assert_eq!(report["quality_metrics"]["todos"], 1);
    assert_eq!(report["quality_metrics"]["fixmes"], 1);

    let summary = &report["summary"];
    assert_eq!(summary["total_libraries"], 3);
    assert_eq!(summary["total_packages"], 1);
    assert_eq!(summary["total_classes"], 2);
    let score = summary["quality_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[test]
fn test_console_summary_printed() {
    let workspace = create_test_workspace();
    let out = workspace.path().join("stats.json");
    let (stdout, _, code) = run_scan(workspace.path(), &out);
    assert_eq!(code, 0);

    assert!(stdout.contains("Analyzing Include directory..."));
    assert!(stdout.contains("=== Summary ==="));
    assert!(stdout.contains("Total Files: 4"));
    assert!(stdout.contains("=== Quality Metrics ==="));
    assert!(stdout.contains("Large Files (>1000 lines): 1"));
    assert!(stdout.contains("Statistics saved to"));
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_repository_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("stats.json");
    let (_, stderr, code) = run_scan(dir.path(), &out);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let report = read_report(&out);
    assert_eq!(report["total_files"], 0);
    assert_eq!(report["summary"]["comment_to_code_ratio"], 0.0);
    assert_eq!(report["summary"]["avg_lines_per_file"], 0.0);
}

#[test]
fn test_overwrites_existing_output() {
    let workspace = create_test_workspace();
    let out = workspace.path().join("stats.json");
    fs::write(&out, "{ \"stale\": true }").unwrap();

    let (_, _, code) = run_scan(workspace.path(), &out);
    assert_eq!(code, 0);
    let report = read_report(&out);
    assert!(report.get("stale").is_none());
}

#[test]
fn test_nonexistent_repo_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("stats.json");
    let (_, _, code) = run_scan(&dir.path().join("missing"), &out);
    assert_ne!(code, 0);
    assert!(!out.exists());
}

#[test]
fn test_repo_config_changes_threshold() {
    let workspace = create_test_workspace();
    write(
        workspace.path(),
        "repostats.toml",
        "[scan]\nlarge_file_threshold = 5\n",
    );
    let out = workspace.path().join("stats.json");
    let (stdout, _, code) = run_scan(workspace.path(), &out);
    assert_eq!(code, 0);

    let report = read_report(&out);
    // IChangeable.h (11 lines) and CFileNameParam.cpp (1001 lines)
    let large = report["quality_metrics"]["large_files"].as_array().unwrap();
    assert_eq!(large.len(), 2);
    assert_eq!(large[0]["lines"], 1001);
    assert!(stdout.contains("Large Files (>5 lines): 2"));
}

//! JSON reporter
//!
//! Serializes the full Report as pretty-printed JSON and writes it
//! atomically: the document goes to a temp file next to the target and is
//! renamed over it, so a failed write never leaves a truncated report.
//! On unix the temp file gets the umask-governed mode a plain create would.

use crate::models::Report;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report to `output_path`, replacing any existing file
pub fn write_report(report: &Report, output_path: &Path) -> Result<()> {
    let json = render(report).context("Failed to serialize report")?;

    let parent = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.flush())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(output_path)
        .with_context(|| format!("Failed to save report to {}", output_path.display()))?;
    Ok(())
}

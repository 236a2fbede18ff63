//! Project-level configuration support
//!
//! Loads optional per-project configuration from `repostats.toml` in the
//! repository root. Every field falls back to the layout of the ACF tree.
//!
//! # Configuration Format
//!
//! ```toml
//! # repostats.toml
//!
//! [layout]
//! library_dir = "Include"
//! package_dir = "Impl"
//! tests_dir = "Tests"
//! docs_dir = "Docs"
//!
//! [scan]
//! source_extensions = ["h", "cpp", "c", "hpp", "cc"]
//! header_extensions = ["h"]
//! line_comment_markers = ["//", "#"]
//! large_file_threshold = 1000
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "repostats.toml";

/// Files strictly larger than this many lines are reported as large
pub const DEFAULT_LARGE_FILE_THRESHOLD: usize = 1000;

/// Where each tree lives relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Library headers and sources, grouped per child directory
    pub library_dir: String,
    /// Package implementations, grouped per child directory
    pub package_dir: String,
    pub tests_dir: String,
    pub docs_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            library_dir: "Include".to_string(),
            package_dir: "Impl".to_string(),
            tests_dir: "Tests".to_string(),
            docs_dir: "Docs".to_string(),
        }
    }
}

/// What gets scanned and how lines are classified
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions (no leading dot) counted as source files
    pub source_extensions: Vec<String>,
    /// Extensions whose contents are searched for classes, interfaces and components
    pub header_extensions: Vec<String>,
    pub test_extensions: Vec<String>,
    pub doc_extensions: Vec<String>,
    /// Prefixes that mark a whole line as a comment.
    /// `#` also catches preprocessor directives.
    pub line_comment_markers: Vec<String>,
    pub large_file_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extensions: strings(&["h", "cpp", "c", "hpp", "cc"]),
            header_extensions: strings(&["h"]),
            test_extensions: strings(&["cpp", "h"]),
            doc_extensions: strings(&["md", "dox"]),
            line_comment_markers: strings(&["//", "#"]),
            large_file_threshold: DEFAULT_LARGE_FILE_THRESHOLD,
        }
    }
}

impl ScanConfig {
    pub fn is_header(&self, ext: &str) -> bool {
        self.header_extensions.iter().any(|h| h == ext)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub layout: LayoutConfig,
    pub scan: ScanConfig,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Load project configuration from the repository root.
///
/// A missing file yields defaults. A file that fails to parse is reported
/// with a warning and also yields defaults.
pub fn load_project_config(repo_path: &Path) -> ProjectConfig {
    let toml_path = repo_path.join(CONFIG_FILE_NAME);
    if !toml_path.exists() {
        debug!("No {} found, using defaults", toml_path.display());
        return ProjectConfig::default();
    }

    match load_toml_config(&toml_path) {
        Ok(config) => {
            debug!("Loaded project config from {}", toml_path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", toml_path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from an explicit TOML file (errors propagate)
pub fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid TOML in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests;

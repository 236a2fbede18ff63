//! Core data models for repostats
//!
//! Everything the scanner produces ends up in a [`Report`], which is
//! serialized exactly once per run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which top-level tree a source file was found under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Library,
    Package,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Library => write!(f, "library"),
            Category::Package => write!(f, "package"),
        }
    }
}

/// Per-file line classification and debt-marker counts.
///
/// `code + comment + blank == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
    pub todos: usize,
    pub fixmes: usize,
    pub hacks: usize,
    pub warnings: usize,
}

impl LineCounts {
    pub fn is_consistent(&self) -> bool {
        self.code + self.comment + self.blank == self.total
    }
}

/// One scanned source file, keyed by its repo-relative path in [`Report::source_files`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub lines: LineCounts,
    pub category: Category,
    /// Extension including the leading dot (".h", ".cpp")
    pub extension: String,
}

/// A class, interface or component declaration pulled out of a header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub file: String,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            file: file.into(),
        }
    }

    pub fn with_base(mut self, base: Option<String>) -> Self {
        self.base = base;
        self
    }
}

/// Totals for one library or package directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub file_count: usize,
    pub total_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeFile {
    pub file: String,
    pub lines: usize,
}

/// Corpus-wide debt markers and oversized files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Sorted descending by line count
    pub large_files: Vec<LargeFile>,
    pub todos: usize,
    pub fixmes: usize,
    pub hacks: usize,
    pub warnings: usize,
}

/// Derived scalar metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_lines: usize,
    pub total_files: usize,
    pub total_libraries: usize,
    pub total_packages: usize,
    pub total_classes: usize,
    pub total_interfaces: usize,
    pub total_components: usize,
    pub test_files: usize,
    pub documentation_files: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub comment_to_code_ratio: f64,
    pub avg_lines_per_file: f64,
    pub avg_lines_per_class: f64,
    /// Advisory heuristic in [0, 100], not a correctness metric
    pub quality_score: f64,
}

/// The full statistics report written to `stats.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: String,
    pub total_files: usize,
    pub total_lines: usize,
    pub source_files: BTreeMap<String, FileRecord>,
    pub libraries: BTreeMap<String, GroupSummary>,
    pub packages: BTreeMap<String, GroupSummary>,
    pub components: Vec<SymbolRecord>,
    pub classes: Vec<SymbolRecord>,
    pub interfaces: Vec<SymbolRecord>,
    pub test_files: usize,
    pub documentation_files: usize,
    pub quality_metrics: QualityMetrics,
    pub summary: Summary,
}

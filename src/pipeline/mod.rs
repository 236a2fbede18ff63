//! Statistics pipeline
//!
//! Orchestrates a full run:
//! 1. Scan the library tree
//! 2. Scan the package tree
//! 3. Summarize library and package groups
//! 4. Count test and documentation files
//! 5. Aggregate totals, ratios and the quality score into a [`Report`]
//!
//! Each phase consumes the previous phase's output; nothing is shared.

use chrono::Local;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ProjectConfig;
use crate::models::{Category, FileRecord, GroupSummary, QualityMetrics, Report, Summary};
use crate::scanner::{self, ScanState};
use crate::scoring::{self, QualityInputs};

/// Full statistics pipeline.
pub struct Pipeline {
    config: ProjectConfig,
    /// Print phase progress to stdout
    show_progress: bool,
}

impl Pipeline {
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            show_progress: true,
        }
    }

    /// Suppress phase progress lines.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn progress(&self, message: &str) {
        if self.show_progress {
            println!("{}", message);
        }
        info!("{}", message);
    }

    /// Run every phase against `repo_path` and build the report.
    pub fn generate(&self, repo_path: &Path) -> Report {
        let layout = &self.config.layout;
        let scan = &self.config.scan;

        self.progress(&format!("Analyzing {} directory...", layout.library_dir));
        let state = scanner::scan_directory(
            ScanState::default(),
            repo_path,
            &layout.library_dir,
            Category::Library,
            scan,
        );

        self.progress(&format!("Analyzing {} directory...", layout.package_dir));
        let state = scanner::scan_directory(
            state,
            repo_path,
            &layout.package_dir,
            Category::Package,
            scan,
        );

        self.progress("Analyzing library structure...");
        let libraries = summarize_groups(repo_path, &layout.library_dir, &state.files);

        self.progress("Analyzing package structure...");
        let packages = summarize_groups(repo_path, &layout.package_dir, &state.files);

        self.progress("Analyzing tests...");
        let test_files = scanner::count_files(repo_path, &layout.tests_dir, &scan.test_extensions);

        self.progress("Analyzing documentation...");
        let documentation_files =
            scanner::count_files(repo_path, &layout.docs_dir, &scan.doc_extensions);

        aggregate(state, libraries, packages, test_files, documentation_files)
    }
}

/// Per-group totals for every immediate child directory of `root_dir`.
///
/// Hidden directories are skipped. Directories without matching files
/// still appear with zero counts; files directly inside `root_dir` belong
/// to no group.
pub fn summarize_groups(
    repo_path: &Path,
    root_dir: &str,
    files: &BTreeMap<String, FileRecord>,
) -> BTreeMap<String, GroupSummary> {
    let mut groups = BTreeMap::new();
    let root = repo_path.join(root_dir);
    let entries = match std::fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("No groups under {}: {}", root.display(), e);
            return groups;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let prefix = format!("{}/{}/", root_dir.trim_end_matches('/'), name);
        let summary = files
            .range(prefix.clone()..)
            .take_while(|(path, _)| path.starts_with(&prefix))
            .fold(GroupSummary::default(), |mut acc, (_, record)| {
                acc.file_count += 1;
                acc.total_lines += record.lines.total;
                acc
            });
        groups.insert(name, summary);
    }

    groups
}

/// Fold the scan results into the final report.
pub fn aggregate(
    state: ScanState,
    libraries: BTreeMap<String, GroupSummary>,
    packages: BTreeMap<String, GroupSummary>,
    test_files: usize,
    documentation_files: usize,
) -> Report {
    let totals = state.totals;
    let total_files = state.total_files();

    let mut large_files = state.large_files;
    large_files.sort_by(|a, b| b.lines.cmp(&a.lines));

    let comment_to_code_ratio = scoring::comment_to_code_ratio(totals.comment, totals.code);
    let quality_score = scoring::quality_score(&QualityInputs {
        todos: totals.todos,
        fixmes: totals.fixmes,
        hacks: totals.hacks,
        code_lines: totals.code,
        comment_ratio: comment_to_code_ratio,
        large_file_count: large_files.len(),
    });

    let summary = Summary {
        total_lines: totals.total,
        total_files,
        total_libraries: libraries.len(),
        total_packages: packages.len(),
        total_classes: state.classes.len(),
        total_interfaces: state.interfaces.len(),
        total_components: state.components.len(),
        test_files,
        documentation_files,
        code_lines: totals.code,
        comment_lines: totals.comment,
        blank_lines: totals.blank,
        comment_to_code_ratio,
        avg_lines_per_file: scoring::avg_lines_per_file(totals.total, total_files),
        avg_lines_per_class: scoring::avg_lines_per_class(totals.code, state.classes.len()),
        quality_score,
    };

    Report {
        generated_at: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        total_files,
        total_lines: totals.total,
        source_files: state.files,
        libraries,
        packages,
        components: state.components,
        classes: state.classes,
        interfaces: state.interfaces,
        test_files,
        documentation_files,
        quality_metrics: QualityMetrics {
            large_files,
            todos: totals.todos,
            fixmes: totals.fixmes,
            hacks: totals.hacks,
            warnings: totals.warnings,
        },
        summary,
    }
}

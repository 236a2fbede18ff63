//! Source tree scanning
//!
//! - [`walker`] finds files under one top-level directory
//! - [`lines`] splits each file into code, comment and blank lines
//! - [`patterns`] pulls declarations out of headers
//!
//! The results of each directory pass are folded into a [`ScanState`],
//! which is taken by value and handed back so every phase can be run and
//! tested on its own.

pub mod lines;
pub mod patterns;
pub mod walker;

pub use lines::LineClassifier;
pub use walker::{count_files, walk_sources, SourceEntry};

use crate::config::ScanConfig;
use crate::models::{Category, FileRecord, LargeFile, LineCounts, SymbolRecord};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Everything accumulated while visiting source directories
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    pub files: BTreeMap<String, FileRecord>,
    pub classes: Vec<SymbolRecord>,
    pub interfaces: Vec<SymbolRecord>,
    pub components: Vec<SymbolRecord>,
    /// Unsorted; the aggregator orders them
    pub large_files: Vec<LargeFile>,
    /// Corpus-wide sums of every per-file count
    pub totals: LineCounts,
}

impl ScanState {
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    /// Record one classified file. Re-visiting a path replaces the old entry
    /// along with any declarations extracted from it.
    fn add_file(&mut self, relative: String, record: FileRecord, large_file_threshold: usize) {
        if let Some(previous) = self.files.get(&relative) {
            subtract(&mut self.totals, &previous.lines);
            self.large_files.retain(|f| f.file != relative);
            self.classes.retain(|s| s.file != relative);
            self.interfaces.retain(|s| s.file != relative);
            self.components.retain(|s| s.file != relative);
        }
        add(&mut self.totals, &record.lines);
        if record.lines.total > large_file_threshold {
            self.large_files.push(LargeFile {
                file: relative.clone(),
                lines: record.lines.total,
            });
        }
        self.files.insert(relative, record);
    }
}

fn add(acc: &mut LineCounts, c: &LineCounts) {
    acc.total += c.total;
    acc.code += c.code;
    acc.comment += c.comment;
    acc.blank += c.blank;
    acc.todos += c.todos;
    acc.fixmes += c.fixmes;
    acc.hacks += c.hacks;
    acc.warnings += c.warnings;
}

fn subtract(acc: &mut LineCounts, c: &LineCounts) {
    acc.total -= c.total;
    acc.code -= c.code;
    acc.comment -= c.comment;
    acc.blank -= c.blank;
    acc.todos -= c.todos;
    acc.fixmes -= c.fixmes;
    acc.hacks -= c.hacks;
    acc.warnings -= c.warnings;
}

/// Scan one top-level directory and fold its files into `state`.
///
/// Headers are additionally run through the declaration extractors.
pub fn scan_directory(
    mut state: ScanState,
    repo_root: &Path,
    subdir: &str,
    category: Category,
    config: &ScanConfig,
) -> ScanState {
    let classifier = LineClassifier::new(config.line_comment_markers.clone());
    let mut visited = 0usize;

    for entry in walk_sources(repo_root, subdir, &config.source_extensions) {
        visited += 1;
        let record = FileRecord {
            lines: classifier.classify_file(&entry.path),
            category,
            extension: entry.dotted_extension(),
        };
        state.add_file(entry.relative.clone(), record, config.large_file_threshold);

        if config.is_header(&entry.extension) {
            extract_header_symbols(&mut state, &entry);
        }
    }

    debug!("Scanned {} {} files under {}", visited, category, subdir);
    state
}

fn extract_header_symbols(state: &mut ScanState, entry: &SourceEntry) {
    let content = match std::fs::read(&entry.path) {
        Ok(bytes) => lines::decode_ignoring_invalid(&bytes),
        Err(e) => {
            warn!("Error extracting declarations from {}: {}", entry.path.display(), e);
            return;
        }
    };
    let symbols = patterns::extract_all(&content, &entry.relative);
    state.classes.extend(symbols.classes);
    state.interfaces.extend(symbols.interfaces);
    state.components.extend(symbols.components);
}

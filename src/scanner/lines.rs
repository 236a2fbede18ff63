//! Line classification
//!
//! Splits a file into blank, comment and code lines with a lexical
//! heuristic: one "inside block comment" flag plus line-prefix checks.
//! Comment markers inside string literals, nested block comments and
//! language-specific quoting are not understood; the counts are approximate.

use crate::models::LineCounts;
use std::path::Path;
use tracing::warn;

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Classifies lines using a fixed set of single-line comment prefixes
#[derive(Debug, Clone)]
pub struct LineClassifier {
    line_markers: Vec<String>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(vec!["//".to_string(), "#".to_string()])
    }
}

impl LineClassifier {
    pub fn new(line_markers: Vec<String>) -> Self {
        Self { line_markers }
    }

    /// Read and classify a file.
    ///
    /// Invalid UTF-8 sequences are dropped. A file that cannot be read is
    /// logged and counted as empty; it never aborts the scan.
    pub fn classify_file(&self, path: &Path) -> LineCounts {
        match std::fs::read(path) {
            Ok(bytes) => self.classify(&decode_ignoring_invalid(&bytes)),
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                LineCounts::default()
            }
        }
    }

    pub fn classify(&self, content: &str) -> LineCounts {
        let mut counts = LineCounts::default();
        let mut in_block_comment = false;

        for line in split_lines(content) {
            counts.total += 1;
            let trimmed = line.trim();

            count_debt_markers(trimmed, &mut counts);

            if trimmed.is_empty() {
                counts.blank += 1;
                continue;
            }

            if !in_block_comment && trimmed.contains(BLOCK_OPEN) {
                counts.comment += 1;
                in_block_comment = !trimmed.contains(BLOCK_CLOSE);
                continue;
            }

            if in_block_comment {
                counts.comment += 1;
                if trimmed.contains(BLOCK_CLOSE) {
                    in_block_comment = false;
                }
                continue;
            }

            if self.line_markers.iter().any(|m| trimmed.starts_with(m.as_str())) {
                counts.comment += 1;
                continue;
            }

            counts.code += 1;
        }

        counts
    }
}

/// Decode UTF-8, silently dropping any invalid byte sequences
pub(crate) fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// start an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Case-insensitive substring search; one line may bump several counters.
/// "WARN" also covers "WARNING", so both share a counter.
fn count_debt_markers(line: &str, counts: &mut LineCounts) {
    if line.is_empty() {
        return;
    }
    let upper = line.to_uppercase();
    if upper.contains("TODO") {
        counts.todos += 1;
    }
    if upper.contains("FIXME") {
        counts.fixmes += 1;
    }
    if upper.contains("HACK") {
        counts.hacks += 1;
    }
    if upper.contains("WARN") {
        counts.warnings += 1;
    }
}

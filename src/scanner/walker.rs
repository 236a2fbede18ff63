//! Source file discovery
//!
//! Walks one subdirectory of the repository and yields the files whose
//! extension is in an allow-set. Every file is visited, including hidden
//! ones and anything a `.gitignore` would exclude.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A file found by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    /// Repo-relative path, always `/`-separated
    pub relative: String,
    /// Extension without the leading dot
    pub extension: String,
}

impl SourceEntry {
    /// Extension as stored in the report (".h")
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// Lazily enumerate files under `root/subdir` whose extension is in `extensions`.
///
/// A missing subdirectory yields nothing. Ordering follows the filesystem.
pub fn walk_sources<'a>(
    root: &'a Path,
    subdir: &str,
    extensions: &'a [String],
) -> impl Iterator<Item = SourceEntry> + 'a {
    let dir = root.join(subdir);
    let walker = if dir.is_dir() {
        let mut builder = WalkBuilder::new(&dir);
        builder.standard_filters(false).follow_links(false);
        Some(builder.build())
    } else {
        debug!("Skipping missing directory {}", dir.display());
        None
    };

    walker
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(move |entry| {
            let path = entry.into_path();
            let ext = path.extension().and_then(|e| e.to_str())?.to_string();
            if !extensions.iter().any(|allowed| *allowed == ext) {
                return None;
            }
            let relative = relative_path(root, &path);
            Some(SourceEntry {
                path,
                relative,
                extension: ext,
            })
        })
}

/// Count files under `root/subdir` matching `extensions`
pub fn count_files(root: &Path, subdir: &str, extensions: &[String]) -> usize {
    walk_sources(root, subdir, extensions).count()
}

/// Repo-relative path with `/` separators regardless of platform
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

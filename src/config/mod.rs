//! Configuration module for repostats
//!
//! This module handles:
//! - Project-level configuration (repostats.toml)
//! - Tree layout (which directories hold libraries, packages, tests, docs)
//! - Scan settings (extensions, comment markers, large-file threshold)

mod project_config;

pub use project_config::{
    load_project_config, load_toml_config, LayoutConfig, ProjectConfig, ScanConfig,
    CONFIG_FILE_NAME, DEFAULT_LARGE_FILE_THRESHOLD,
};

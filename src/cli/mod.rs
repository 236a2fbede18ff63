//! CLI definition and handler for the statistics scanner

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{load_project_config, load_toml_config, ProjectConfig};
use crate::pipeline::Pipeline;
use crate::reporters;

/// repostats - repository statistics for C++ component codebases
///
/// Counts code, comment and blank lines under the library and package
/// trees, extracts class/interface/component declarations from headers,
/// and writes everything as a JSON report.
#[derive(Parser, Debug)]
#[command(name = "repostats")]
#[command(
    version,
    about = "Generate line-count, declaration and quality statistics for a repository",
    after_help = "\
Examples:
  repostats                            Scan the current directory into stats.json
  repostats ../Acf                     Scan another checkout
  repostats ../Acf out/stats.json      Choose the report location
  repostats . --config ci.toml         Use an explicit config file"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    /// Where to write the JSON report (overwritten if present)
    #[arg(default_value = "stats.json")]
    pub output_path: PathBuf,

    /// Config file (default: repostats.toml in the repository, if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Validate the repository path
fn resolve_repo_path(path: &Path) -> Result<PathBuf> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Repository path does not exist: {}", path.display()))?;
    if !repo_path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", repo_path.display());
    }
    Ok(repo_path)
}

fn resolve_config(cli: &Cli, repo_path: &Path) -> Result<ProjectConfig> {
    match &cli.config {
        Some(path) => load_toml_config(path),
        None => Ok(load_project_config(repo_path)),
    }
}

/// Run a scan and write the report
pub fn run(cli: Cli) -> Result<()> {
    println!(
        "Generating statistics for repository: {}",
        cli.repo_path.display()
    );

    let repo_path = resolve_repo_path(&cli.repo_path)?;
    let config = resolve_config(&cli, &repo_path)?;
    let threshold = config.scan.large_file_threshold;

    let report = Pipeline::new(config).generate(&repo_path);

    print!("{}", reporters::render_summary(&report, threshold));

    reporters::write_report(&report, &cli.output_path)?;
    println!("Statistics saved to {}", cli.output_path.display());
    Ok(())
}

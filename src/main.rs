//! repostats - repository statistics scanner
//!
//! Walks the library and package trees of a C++ codebase and writes a JSON
//! report of line counts, declarations and a heuristic quality score.

use anyhow::Result;
use clap::Parser;
use repostats::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so stdout stays the summary
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}

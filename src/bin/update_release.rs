//! update-release - replace the description of a tagged GitHub release
//!
//! Requires `GITHUB_TOKEN`. Exits non-zero, without touching the network,
//! when the token is missing; exits non-zero on any HTTP error status.

use anyhow::Context;
use clap::Parser;
use repostats::release::{
    count_entries, ClientConfig, GitHubClient, ReleaseError, ReleaseTarget, DEFAULT_API_URL,
    RELEASE_NOTES_2_0_0, TOKEN_ENV,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Update the release notes of an existing GitHub release
#[derive(Parser, Debug)]
#[command(name = "update-release", version)]
struct Args {
    /// Repository owner
    #[arg(long, default_value = "ImagingTools")]
    owner: String,

    /// Repository name
    #[arg(long, default_value = "Acf")]
    repo: String,

    /// Release tag to update
    #[arg(long, default_value = "2.0.0")]
    tag: String,

    /// Read the new release body from this file instead of the built-in 2.0.0 notes
    #[arg(long)]
    notes: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<ReleaseError>() {
        Some(ReleaseError::MissingToken { env_var }) => {
            eprintln!("Error: {}", err);
            eprintln!("Please set it with: export {}=your_token", env_var);
        }
        Some(release_err) => {
            eprintln!("{}", release_err);
            if let Some(body) = release_err.response_body() {
                eprintln!("Response: {}", body);
            }
        }
        None => eprintln!("Error: {:#}", err),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let client = GitHubClient::from_env(ClientConfig {
        api_url: args.api_url,
        timeout: Duration::from_secs(args.timeout),
        ..Default::default()
    })?;
    tracing::debug!("Using token from {}", TOKEN_ENV);

    let body = match &args.notes {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read release notes {}", path.display()))?,
        None => RELEASE_NOTES_2_0_0.to_string(),
    };

    let target = ReleaseTarget {
        owner: args.owner,
        repo: args.repo,
        tag: args.tag,
    };

    println!(
        "Updating release {} for {}/{}...",
        target.tag, target.owner, target.repo
    );
    println!(
        "New release body has {} bullet point entries.",
        count_entries(&body)
    );

    println!("Fetching release ID...");
    let release_id = client.release_id(&target)?;
    println!("Release ID: {}", release_id);

    println!("Updating release notes...");
    let updated = client.update_release_body(&target, release_id, &body)?;

    println!("\n✓ Release has been updated successfully!");
    println!("  View at: {}", updated.html_url);
    Ok(())
}

//! GitHub release description patching
//!
//! Resolves a tag to its release id, then replaces the release body.
//! Two blocking calls, no retries.
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: Required bearer token
//! - `GITHUB_API_URL`: Optional API base (default `https://api.github.com`)
//!
//! # Example
//!
//! ```rust,ignore
//! use repostats::release::{ClientConfig, GitHubClient, ReleaseTarget, RELEASE_NOTES_2_0_0};
//!
//! let client = GitHubClient::from_env(ClientConfig::default())?;
//! let target = ReleaseTarget::default();
//! let id = client.release_id(&target)?;
//! let updated = client.update_release_body(&target, id, RELEASE_NOTES_2_0_0)?;
//! println!("{}", updated.html_url);
//! ```

mod client;
mod notes;

pub use client::{ClientConfig, GitHubClient, Release, DEFAULT_API_URL, TOKEN_ENV};
pub use notes::{count_entries, RELEASE_NOTES_2_0_0};

use thiserror::Error;

/// Errors that can occur while patching a release
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("{env_var} environment variable is not set")]
    MissingToken { env_var: String },

    #[error("Error {action}: HTTP {status}")]
    Api {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error("Error {action}: {message}")]
    Transport {
        action: &'static str,
        message: String,
    },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

impl ReleaseError {
    /// Response body returned with an HTTP error status, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ReleaseError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Which release to patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTarget {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

impl Default for ReleaseTarget {
    fn default() -> Self {
        Self {
            owner: "ImagingTools".to_string(),
            repo: "Acf".to_string(),
            tag: "2.0.0".to_string(),
        }
    }
}

impl std::fmt::Display for ReleaseTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.tag)
    }
}

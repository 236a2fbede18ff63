//! GitHub REST client for release updates
//!
//! Uses ureq (sync HTTP). Status codes are inspected here rather than by
//! ureq so error bodies can be surfaced to the user.

use super::{ReleaseError, ReleaseResult, ReleaseTarget};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// Route requests through the proxy named by HTTP(S)_PROXY, if set
    pub use_env_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            use_env_proxy: true,
        }
    }
}

/// The fields of a release this tool reads
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    body: &'a str,
}

pub struct GitHubClient {
    config: ClientConfig,
    token: String,
    agent: ureq::Agent,
}

fn make_agent(config: &ClientConfig) -> ureq::Agent {
    let proxy = if config.use_env_proxy {
        ureq::Proxy::try_from_env()
    } else {
        None
    };
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(config.timeout))
        .proxy(proxy)
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(config: ClientConfig, token: impl Into<String>) -> Self {
        let agent = make_agent(&config);
        Self {
            config,
            token: token.into(),
            agent,
        }
    }

    /// Build a client from `GITHUB_TOKEN`. An empty value counts as unset.
    pub fn from_env(config: ClientConfig) -> ReleaseResult<Self> {
        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ReleaseError::MissingToken {
                env_var: TOKEN_ENV.to_string(),
            })?;
        Ok(Self::new(config, token))
    }

    fn repo_url(&self, target: &ReleaseTarget) -> String {
        format!(
            "{}/repos/{}/{}",
            self.config.api_url.trim_end_matches('/'),
            target.owner,
            target.repo
        )
    }

    /// Resolve the release for `target.tag`
    pub fn release_by_tag(&self, target: &ReleaseTarget) -> ReleaseResult<Release> {
        const ACTION: &str = "fetching release";
        let url = format!("{}/releases/tags/{}", self.repo_url(target), target.tag);

        let response = self
            .agent
            .get(url.as_str())
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .call()
            .map_err(|e| ReleaseError::Transport {
                action: ACTION,
                message: e.to_string(),
            })?;

        read_release(response, ACTION)
    }

    pub fn release_id(&self, target: &ReleaseTarget) -> ReleaseResult<u64> {
        self.release_by_tag(target).map(|r| r.id)
    }

    /// Replace the description of release `release_id`
    pub fn update_release_body(
        &self,
        target: &ReleaseTarget,
        release_id: u64,
        body: &str,
    ) -> ReleaseResult<Release> {
        const ACTION: &str = "updating release";
        let url = format!("{}/releases/{}", self.repo_url(target), release_id);

        let response = self
            .agent
            .patch(url.as_str())
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("Content-Type", "application/json")
            .send_json(&UpdateBody { body })
            .map_err(|e| ReleaseError::Transport {
                action: ACTION,
                message: e.to_string(),
            })?;

        read_release(response, ACTION)
    }
}

fn read_release(
    response: ureq::http::Response<ureq::Body>,
    action: &'static str,
) -> ReleaseResult<Release> {
    let status = response.status();
    if !status.is_success() {
        let body = response.into_body().read_to_string().unwrap_or_default();
        return Err(ReleaseError::Api {
            action,
            status: status.as_u16(),
            body,
        });
    }

    response
        .into_body()
        .read_json::<Release>()
        .map_err(|e| ReleaseError::ParseError(e.to_string()))
}

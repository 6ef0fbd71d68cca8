//! Blocking GitHub REST client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, LINK};
use serde::Deserialize;
use tracing::debug;

use crate::{GithubError, GithubResult, Repo};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: u32 = 100;
const USER_AGENT: &str = concat!("pretty-changelog/", env!("CARGO_PKG_VERSION"));

/// Core API quota as reported by `GET /rate_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Quota {
    /// Requests left in the current window.
    pub remaining: u64,
    /// Window reset as a Unix timestamp (seconds).
    pub reset: i64,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: Quota,
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    #[serde(default)]
    commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    sha: String,
    commit: CommitDetail,
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    #[serde(default)]
    login: String,
}

impl CompareCommit {
    /// Formats the commit as `"<sha>: <first message line> (@<login>)"`.
    fn to_line(&self) -> String {
        let title = self.commit.message.split('\n').next().unwrap_or_default();
        let login = self.author.as_ref().map_or("", |a| a.login.as_str());
        format!("{}: {title} (@{login})", self.sha)
    }
}

/// GitHub API client authenticated with a token.
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Creates a client for a custom API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> GithubResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Returns the core API quota.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub fn rate_limit(&self) -> GithubResult<Quota> {
        let url = format!("{}/rate_limit", self.base_url);
        let body: RateLimitResponse = self.get(&url)?.json()?;
        Ok(body.resources.core)
    }

    /// Returns every commit between `base` and `head`, oldest first, as
    /// changelog lines.
    ///
    /// Follows the `Link: rel="next"` header until the last page.
    ///
    /// # Errors
    ///
    /// Returns the first failing page's error.
    pub fn compare(&self, repo: &Repo, base: &str, head: &str) -> GithubResult<Vec<String>> {
        let mut next = Some(format!(
            "{}/repos/{}/{}/compare/{base}...{head}?per_page={PER_PAGE}",
            self.base_url, repo.owner, repo.name
        ));
        let mut lines = Vec::new();

        while let Some(url) = next {
            debug!(%url, "fetching compare page");
            let response = self.get(&url)?;
            next = next_link(response.headers());

            let page: CompareResponse = response.json()?;
            lines.extend(page.commits.iter().map(CompareCommit::to_line));
        }

        Ok(lines)
    }

    fn get(&self, url: &str) -> GithubResult<Response> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(response)
    }
}

/// Extracts the `rel="next"` target from a `Link` header.
fn next_link(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        params
            .split(';')
            .any(|p| p.trim() == r#"rel="next""#)
            .then(|| {
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string()
            })
    })
}

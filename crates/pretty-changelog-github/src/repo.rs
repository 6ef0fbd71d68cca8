//! Repository identification from a remote URL.

use std::fmt;

use url::Url;

use crate::{GithubError, GithubResult};

/// A hosted repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repo {
    /// Owner; nested groups are joined with `/`.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl Repo {
    /// Extracts the repository from a remote URL as printed by
    /// `git ls-remote --get-url`.
    ///
    /// Handles `https://host/owner/name(.git)`, scp-style
    /// `git@host:owner/name(.git)` and `ssh://` URLs. Every path segment
    /// but the last forms the owner.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::UnsupportedUrl`] if the URL has no path.
    pub fn from_url(raw: &str) -> GithubResult<Self> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
        let path = repo_path(trimmed).ok_or_else(|| GithubError::UnsupportedUrl(raw.to_string()))?;

        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Err(GithubError::UnsupportedUrl(raw.to_string())),
            [owner] => Ok(Self {
                owner: (*owner).to_string(),
                name: String::new(),
            }),
            [owners @ .., name] => Ok(Self {
                owner: owners.join("/"),
                name: (*name).to_string(),
            }),
        }
    }

    /// Checks that both owner and name are known.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidScmUrl`] otherwise.
    pub fn check_scm(&self) -> GithubResult<()> {
        if self.owner.is_empty() || self.name.is_empty() {
            return Err(GithubError::InvalidScmUrl(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.owner.is_empty() && self.name.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn repo_path(url: &str) -> Option<String> {
    let url = if url.matches(':').count() == 1 {
        url.rsplit_once(':').map_or(url, |(_, rest)| rest)
    } else {
        url
    };

    if let Some(rest) = url.strip_prefix("//") {
        return rest.split_once('/').map(|(_, path)| path.to_string());
    }
    if url.contains("://") {
        return Url::parse(url).ok().map(|u| u.path().to_string());
    }
    Some(url.to_string())
}

/// Removes credentials from an `https://` URL so it can be logged.
pub fn redact_url(raw: &str) -> String {
    if !raw.starts_with("https://") {
        return raw.to_string();
    }
    match Url::parse(raw) {
        Ok(mut url) => {
            // Both setters only fail for cannot-be-a-base URLs.
            let _ = url.set_username("");
            let _ = url.set_password(None);
            url.to_string()
        }
        Err(_) => raw.to_string(),
    }
}

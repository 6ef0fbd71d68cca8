//! GitHub error types.

use pretty_changelog_commit::SourceError;
use thiserror::Error;

/// GitHub-related errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The remote URL has no repository path.
    #[error("unsupported repository URL: {0}")]
    UnsupportedUrl(String),

    /// The remote URL lacks an owner or a name.
    #[error("invalid scm url: {0}")]
    InvalidScmUrl(String),

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl From<GithubError> for SourceError {
    fn from(err: GithubError) -> Self {
        SourceError::Remote(err.to_string())
    }
}

/// Result type for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;

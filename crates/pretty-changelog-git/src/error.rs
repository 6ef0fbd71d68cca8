//! Git error types.

use pretty_changelog_commit::SourceError;
use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be found.
    #[error("git not present in PATH")]
    NotInstalled,

    /// Not inside a git work tree.
    #[error("current folder is not a git repository")]
    NotARepo,

    /// No remote to read a URL from.
    #[error("no remote configured to list refs from")]
    NoRemote,

    /// No tag could be resolved for HEAD.
    #[error("git doesn't contain any tags")]
    NoTags,

    /// HEAD is not the commit the current tag points at.
    #[error("git tag {tag} was not made against commit {commit}")]
    TagMismatch {
        /// HEAD commit.
        commit: String,
        /// Resolved current tag.
        tag: String,
    },

    /// A git command exited unsuccessfully; holds its stderr.
    #[error("{0}")]
    Command(String),

    /// A query failed while resolving release information.
    #[error("couldn't get {what}: {source}")]
    Query {
        /// What was being resolved.
        what: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<GitError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GitError {
    /// Wraps an error with the name of the value being resolved.
    #[must_use]
    pub fn query(what: &'static str, source: GitError) -> Self {
        Self::Query {
            what,
            source: Box::new(source),
        }
    }
}

impl From<GitError> for SourceError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::Command(stderr) => SourceError::Git(stderr),
            other => SourceError::Repository(other.to_string()),
        }
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] pretty_changelog_git::GitError),

    /// Log source error, reported verbatim.
    #[error("{0}")]
    Source(#[from] pretty_changelog_commit::SourceError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] pretty_changelog_config::ConfigError),

    /// A filter pattern does not compile.
    #[error("invalid filter {pattern:?}: {source}")]
    InvalidFilter {
        /// The offending pattern.
        pattern: String,
        /// Compile error.
        #[source]
        source: regex::Error,
    },

    /// A group pattern does not compile.
    #[error("failed to group into {title:?}: {source}")]
    InvalidGroup {
        /// Title of the offending group.
        title: String,
        /// Compile error.
        #[source]
        source: regex::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

//! Log source capability.

use thiserror::Error;

use crate::{CommitLine, ReleaseRange};

/// Errors surfaced by a log source.
///
/// Messages carry the raw failure text of the underlying call.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The git process exited unsuccessfully.
    #[error("{0}")]
    Git(String),

    /// The remote API request failed.
    #[error("{0}")]
    Remote(String),

    /// The repository could not be used as a source.
    #[error("{0}")]
    Repository(String),
}

/// Result type for log source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Produces the ordered commit lines of a release range, newest first.
pub trait LogSource {
    /// Returns the source name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches the commit lines for the given range.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn fetch(&self, range: &ReleaseRange) -> SourceResult<Vec<CommitLine>>;
}

//! Changelog generation from resolved release information.

use pretty_changelog_commit::LogSource;
use pretty_changelog_git::GitInfo;
use tracing::info;

use crate::{CoreResult, Document, EntryPipeline};

/// Produces the changelog document for a release.
pub struct Generator<'a> {
    pipeline: EntryPipeline,
    source: &'a dyn LogSource,
}

impl<'a> Generator<'a> {
    /// Creates a generator reading commits from `source`.
    pub fn new(pipeline: EntryPipeline, source: &'a dyn LogSource) -> Self {
        Self { pipeline, source }
    }

    /// Fetches the release's commits and renders the document.
    ///
    /// # Errors
    ///
    /// Returns the log source's error unchanged.
    pub fn generate(&self, git: &GitInfo) -> CoreResult<String> {
        let range = git.range();
        info!(
            source = self.source.name(),
            from = range.lower_bound(),
            to = %range.current,
            "generating changelog"
        );

        let lines = self.source.fetch(&range)?;
        info!(commits = lines.len(), version = git.version(), "fetched commits");

        let body = self.pipeline.run(lines);
        Ok(Document::new().section(body).render())
    }
}

//! Release range resolution.

use pretty_changelog_commit::ReleaseRange;
use tracing::{debug, info, warn};

use crate::{GitError, GitResult, RefQuery};

/// Tag used when the repository has no usable tag.
pub const DEFAULT_TAG: &str = "v0.0.0";

/// Release information resolved from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    /// Current release tag, or [`DEFAULT_TAG`] when untagged.
    pub current_tag: String,
    /// Previous release tag, if any.
    pub previous_tag: Option<String>,
    /// Full hash of `HEAD`.
    pub commit: String,
    /// Full hash of the first commit.
    pub first_commit: String,
    /// False when `current_tag` is the synthetic default.
    pub tagged: bool,
}

impl GitInfo {
    /// Returns the current tag without its leading `v`.
    #[must_use]
    pub fn version(&self) -> &str {
        self.current_tag
            .strip_prefix('v')
            .unwrap_or(&self.current_tag)
    }

    /// Returns the commit range log sources read from.
    ///
    /// The upper bound is the `HEAD` commit when no tag exists.
    #[must_use]
    pub fn range(&self) -> ReleaseRange {
        let current = if self.tagged {
            &self.current_tag
        } else {
            &self.commit
        };
        let range = ReleaseRange::new(current.clone(), self.first_commit.clone());
        match &self.previous_tag {
            Some(previous) => range.with_previous(previous.clone()),
            None => range,
        }
    }
}

/// Resolves the current and previous release tags.
pub struct RangeResolver<'a, Q: RefQuery> {
    query: &'a Q,
    excluding: Vec<String>,
}

impl<'a, Q: RefQuery> RangeResolver<'a, Q> {
    /// Creates a resolver over the given query implementation.
    pub fn new(query: &'a Q) -> Self {
        Self {
            query,
            excluding: Vec::new(),
        }
    }

    /// Sets tag names that must never be picked.
    #[must_use]
    pub fn with_excluding(mut self, excluding: Vec<String>) -> Self {
        self.excluding = excluding;
        self
    }

    /// Resolves release information for `HEAD`.
    ///
    /// A repository without tags is not an error: the result carries
    /// [`DEFAULT_TAG`] with `tagged` unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not a repository, if `HEAD` or
    /// the first commit cannot be resolved, or if `HEAD` is not the commit
    /// the current tag was made against.
    pub fn resolve(&self) -> GitResult<GitInfo> {
        if !self.query.is_repo()? {
            return Err(GitError::NotARepo);
        }

        let commit = self
            .query
            .head_commit()
            .map_err(|e| GitError::query("current commit", e))?;
        let first_commit = self
            .query
            .first_commit()
            .map_err(|e| GitError::query("first commit", e))?;

        let Some(current_tag) = self
            .current_tag()
            .map_err(|e| GitError::query("current tag", e))?
        else {
            warn!(tag = DEFAULT_TAG, "{}", GitError::NoTags);
            return Ok(GitInfo {
                current_tag: DEFAULT_TAG.to_string(),
                previous_tag: None,
                commit,
                first_commit,
                tagged: false,
            });
        };

        let previous_tag = self.previous_tag(&current_tag);
        info!(
            current = %current_tag,
            previous = previous_tag.as_deref().unwrap_or(&first_commit),
            "resolved release range"
        );

        if !self.query.is_exact_tag(&current_tag)? {
            return Err(GitError::TagMismatch {
                commit,
                tag: current_tag,
            });
        }

        Ok(GitInfo {
            current_tag,
            previous_tag,
            commit,
            first_commit,
            tagged: true,
        })
    }

    /// Returns the tag for `HEAD`: an exact tag first, else the nearest
    /// ancestor tag.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails for a reason other than a missing tag.
    pub fn current_tag(&self) -> GitResult<Option<String>> {
        let at_head = self.query.tags_pointing_at("HEAD")?;
        if let Some(tag) = self.first_allowed(&at_head) {
            return Ok(Some(tag));
        }

        let nearest = self.query.describe("HEAD", &self.excluding)?;
        Ok(nearest.filter(|tag| self.is_allowed(tag)))
    }

    /// Returns the release tag before `current`, or `None` when the range
    /// should start at the first commit.
    pub fn previous_tag(&self, current: &str) -> Option<String> {
        match self.try_previous_tag(current) {
            Ok(tag) => tag,
            Err(err) => {
                debug!(current, error = %err, "no previous tag");
                None
            }
        }
    }

    fn try_previous_tag(&self, current: &str) -> GitResult<Option<String>> {
        let Some(nearest) = self
            .query
            .describe(&format!("tags/{current}^"), &self.excluding)?
        else {
            return Ok(None);
        };

        let sha = self.query.commit_of(&nearest)?;
        let candidates = self.query.tags_pointing_at(&sha)?;
        Ok(self.first_allowed(&candidates))
    }

    fn first_allowed(&self, tags: &[String]) -> Option<String> {
        tags.iter().find(|tag| self.is_allowed(tag)).cloned()
    }

    fn is_allowed(&self, tag: &str) -> bool {
        !self.excluding.iter().any(|excluded| excluded == tag)
    }
}

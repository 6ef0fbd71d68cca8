//! Reference queries used by the range resolver.

use crate::runner::{clean, clean_all_lines};
use crate::{GitError, GitResult, GitRunner};

/// Tag and commit lookups the range resolver depends on.
///
/// Implemented by [`GitRunner`] against the `git` executable; tests provide
/// in-memory implementations.
pub trait RefQuery {
    /// Returns true if the working directory is inside a git work tree.
    ///
    /// # Errors
    ///
    /// Returns an error if git could not be run at all.
    fn is_repo(&self) -> GitResult<bool>;

    /// Returns the full hash of `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HEAD` cannot be resolved.
    fn head_commit(&self) -> GitResult<String>;

    /// Returns the full hash of the first root commit reachable from `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be walked.
    fn first_commit(&self) -> GitResult<String>;

    /// Returns the tags pointing exactly at `reference`, highest version
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag listing fails.
    fn tags_pointing_at(&self, reference: &str) -> GitResult<Vec<String>>;

    /// Returns the nearest tag reachable from `reference`, skipping
    /// `excluding`, or `None` if no tag qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` is invalid or git fails otherwise.
    fn describe(&self, reference: &str, excluding: &[String]) -> GitResult<Option<String>>;

    /// Resolves `reference` to a commit hash.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` does not name a commit.
    fn commit_of(&self, reference: &str) -> GitResult<String>;

    /// Returns true if `HEAD` is exactly the commit `tag` points at.
    ///
    /// # Errors
    ///
    /// Returns an error only if git could not be run.
    fn is_exact_tag(&self, tag: &str) -> GitResult<bool>;

    /// Returns the URL of the default remote.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoRemote`] when no remote is configured.
    fn remote_url(&self) -> GitResult<String>;
}

/// Stderr fragments git prints when no tag can describe a commit.
const NO_TAG_MARKERS: [&str; 3] = ["No names found", "No tags can describe", "cannot describe"];

impl RefQuery for GitRunner {
    fn is_repo(&self) -> GitResult<bool> {
        match self.run(["rev-parse", "--is-inside-work-tree"]) {
            Ok(out) => Ok(out.trim() == "true"),
            Err(GitError::Command(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn head_commit(&self) -> GitResult<String> {
        self.run_clean(["show", "--format=%H", "-s", "HEAD"])
    }

    fn first_commit(&self) -> GitResult<String> {
        self.run_clean(["rev-list", "--max-parents=0", "HEAD"])
    }

    fn tags_pointing_at(&self, reference: &str) -> GitResult<Vec<String>> {
        let out = self.run([
            "tag",
            "--points-at",
            reference,
            "--sort=-version:refname",
        ])?;
        Ok(clean_all_lines(&out))
    }

    fn describe(&self, reference: &str, excluding: &[String]) -> GitResult<Option<String>> {
        let mut args = vec![
            "describe".to_string(),
            "--tags".to_string(),
            "--abbrev=0".to_string(),
        ];
        for tag in excluding {
            args.push("--exclude".to_string());
            args.push(tag.clone());
        }
        args.push(reference.to_string());

        match self.run(&args) {
            Ok(out) => Ok(Some(clean(&out)).filter(|tag| !tag.is_empty())),
            Err(GitError::Command(stderr))
                if NO_TAG_MARKERS.iter().any(|marker| stderr.contains(marker)) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn commit_of(&self, reference: &str) -> GitResult<String> {
        self.run_clean(["rev-list", "-n1", reference])
    }

    fn is_exact_tag(&self, tag: &str) -> GitResult<bool> {
        match self.run(["describe", "--exact-match", "--tags", "--match", tag]) {
            Ok(_) => Ok(true),
            Err(GitError::Command(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn remote_url(&self) -> GitResult<String> {
        match self.run_clean(["ls-remote", "--get-url"]) {
            Ok(url) if !url.is_empty() => Ok(url),
            Ok(_) => Err(GitError::NoRemote),
            Err(GitError::Command(stderr)) if stderr.contains("No remote configured") => {
                Err(GitError::NoRemote)
            }
            Err(err) => Err(err),
        }
    }
}

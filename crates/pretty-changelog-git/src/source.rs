//! Local `git log` source.

use pretty_changelog_commit::{CommitLine, LogSource, ReleaseRange, SourceResult, parse_log};
use tracing::debug;

use crate::GitRunner;

const LOG_ARGS: [&str; 5] = [
    "log",
    "--pretty=oneline",
    "--abbrev-commit",
    "--no-decorate",
    "--no-color",
];

/// Reads commit lines from the local repository, newest first.
#[derive(Debug, Clone)]
pub struct GitLogSource {
    runner: GitRunner,
}

impl GitLogSource {
    /// Creates a source reading through the given runner.
    #[must_use]
    pub fn new(runner: GitRunner) -> Self {
        Self { runner }
    }

    /// Builds the `git log` arguments for a range.
    ///
    /// A full commit hash as lower bound means the range starts at the
    /// first commit; both revisions are passed so the root is included.
    #[must_use]
    pub fn log_args(range: &ReleaseRange) -> Vec<String> {
        let mut args: Vec<String> = LOG_ARGS.iter().map(ToString::to_string).collect();
        let lower = range.lower_bound();

        if is_full_sha(lower) {
            args.push(lower.to_string());
            args.push(range.current.clone());
        } else {
            args.push(format!("tags/{lower}..tags/{}", range.current));
        }
        args
    }
}

impl LogSource for GitLogSource {
    fn name(&self) -> &'static str {
        "git"
    }

    fn fetch(&self, range: &ReleaseRange) -> SourceResult<Vec<CommitLine>> {
        let args = Self::log_args(range);
        debug!(?args, "reading git log");

        let output = self.runner.run(&args)?;
        Ok(parse_log(&output))
    }
}

fn is_full_sha(reference: &str) -> bool {
    reference.len() == 40 && reference.chars().all(|c| c.is_ascii_hexdigit())
}

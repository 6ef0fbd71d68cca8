//! Thin wrapper around the `git` executable.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use pretty_changelog_config::Environment;
use tracing::debug;

use crate::{GitError, GitResult};

/// Runs `git` commands in a working directory.
///
/// Child processes receive the captured [`Environment`] snapshot so that
/// variables declared in the configuration reach git.
#[derive(Debug, Clone)]
pub struct GitRunner {
    workdir: PathBuf,
    env: Environment,
}

impl GitRunner {
    /// Creates a runner for the given directory.
    pub fn new(workdir: impl Into<PathBuf>, env: Environment) -> Self {
        Self {
            workdir: workdir.into(),
            env,
        }
    }

    /// Runs `git <args>` and returns its stdout.
    ///
    /// Signature display is disabled so that `git log` output stays one
    /// line per commit.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotInstalled`] if git cannot be spawned and
    /// [`GitError::Command`] with the command's stderr if it exits with a
    /// non-zero status.
    pub fn run<I, S>(&self, args: I) -> GitResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.args(["-c", "log.showSignature=false"])
            .args(args)
            .current_dir(&self.workdir)
            .envs(self.env.iter());

        debug!(command = ?cmd, "running git");

        let output = cmd.output().map_err(|err| match err.kind() {
            ErrorKind::NotFound => GitError::NotInstalled,
            _ => GitError::Io(err),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::Command(stderr.trim_end_matches('\n').to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs a command and returns the first line of its output, cleaned.
    ///
    /// # Errors
    ///
    /// Propagates [`GitRunner::run`] errors.
    pub fn run_clean<I, S>(&self, args: I) -> GitResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.run(args).map(|out| clean(&out))
    }
}

/// Returns the first line of `output` with single quotes removed.
pub fn clean(output: &str) -> String {
    output
        .lines()
        .next()
        .unwrap_or_default()
        .replace('\'', "")
}

/// Returns every non-empty line of `output`, trimmed, with single quotes removed.
pub fn clean_all_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.replace('\'', ""))
        .collect()
}

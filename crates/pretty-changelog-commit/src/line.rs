//! Commit line type as produced by a log source.

use std::fmt;

/// A single changelog entry of the form `"<id> <message>"`.
///
/// The identifier is everything before the first space, the *info* is
/// everything after it. A line without a space is an identifier with an
/// empty message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitLine {
    line: String,
}

impl CommitLine {
    /// Creates a new commit line.
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Returns the full line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Splits the line into identifier and info.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        self.line.split_once(' ').unwrap_or((&self.line, ""))
    }

    /// Returns the commit identifier (first token).
    #[must_use]
    pub fn id(&self) -> &str {
        self.split().0
    }

    /// Returns the info substring used for filtering and sorting.
    #[must_use]
    pub fn info(&self) -> &str {
        self.split().1
    }

    /// Returns true if the line has no content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.line.is_empty()
    }

    /// Applies an abbreviation policy to the identifier.
    #[must_use]
    pub fn abbreviate(&self, abbrev: Abbrev) -> Self {
        let (id, info) = self.split();
        match abbrev {
            Abbrev::Keep => self.clone(),
            Abbrev::Drop => Self::new(info),
            Abbrev::Truncate(len) => match id.char_indices().nth(len) {
                None => self.clone(),
                Some((end, _)) if info.is_empty() => Self::new(&id[..end]),
                Some((end, _)) => Self::new(format!("{} {info}", &id[..end])),
            },
        }
    }

    /// Consumes the line and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.line
    }
}

impl fmt::Display for CommitLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl From<&str> for CommitLine {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl From<String> for CommitLine {
    fn from(line: String) -> Self {
        Self::new(line)
    }
}

/// Identifier abbreviation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Abbrev {
    /// Keep the identifier unchanged.
    #[default]
    Keep,
    /// Drop the identifier entirely.
    Drop,
    /// Truncate the identifier to its first `n` characters.
    Truncate(usize),
}

impl From<i32> for Abbrev {
    /// `0` keeps, negative drops, positive truncates.
    fn from(setting: i32) -> Self {
        match usize::try_from(setting) {
            Ok(0) => Self::Keep,
            Ok(len) => Self::Truncate(len),
            Err(_) => Self::Drop,
        }
    }
}

/// Splits raw log output into commit lines.
///
/// A single trailing blank line is dropped and single quotes are removed
/// from every line.
#[must_use]
pub fn parse_log(output: &str) -> Vec<CommitLine> {
    let mut lines: Vec<&str> = output.split('\n').collect();
    if lines.last().is_some_and(|last| last.trim().is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .map(|line| CommitLine::new(line.replace('\'', "")))
        .collect()
}

//! Include/exclude filtering on commit info.

use pretty_changelog_commit::CommitLine;
use pretty_changelog_config::FiltersConfig;
use regex::Regex;

use crate::{CoreError, CoreResult};

/// Compiled message filters.
///
/// A non-empty include list disables the exclude list.
#[derive(Debug, Clone)]
pub enum EntryFilter {
    /// Keep everything.
    Off,
    /// Keep entries matching any pattern, pattern by pattern.
    Include(Vec<Regex>),
    /// Drop entries matching any pattern.
    Exclude(Vec<Regex>),
}

impl EntryFilter {
    /// Compiles the configured filters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFilter`] naming the first bad pattern.
    pub fn from_config(config: &FiltersConfig) -> CoreResult<Self> {
        if !config.include.is_empty() {
            return compile_all(&config.include).map(Self::Include);
        }
        if !config.exclude.is_empty() {
            return compile_all(&config.exclude).map(Self::Exclude);
        }
        Ok(Self::Off)
    }

    /// Applies the filter to the entries' info.
    ///
    /// Include concatenates the matches of each pattern in turn, so an
    /// entry matching two patterns appears twice.
    pub fn apply(&self, lines: Vec<CommitLine>) -> Vec<CommitLine> {
        match self {
            Self::Off => lines,
            Self::Include(patterns) => patterns
                .iter()
                .flat_map(|re| lines.iter().filter(move |line| re.is_match(line.info())))
                .cloned()
                .collect(),
            Self::Exclude(patterns) => lines
                .into_iter()
                .filter(|line| !patterns.iter().any(|re| re.is_match(line.info())))
                .collect(),
        }
    }
}

fn compile_all(patterns: &[String]) -> CoreResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| CoreError::InvalidFilter {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

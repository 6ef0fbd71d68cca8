//! Configuration schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extra environment variables as `KEY=VALUE` strings.
    #[serde(default)]
    pub env: Vec<String>,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Changelog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Include/exclude filters applied to commit messages.
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Sort direction of entries.
    #[serde(default)]
    pub sort: SortDirection,

    /// Where commits are read from.
    #[serde(default, rename = "use")]
    pub source: SourceKind,

    /// Groups entries are sorted into.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    /// Identifier abbreviation: `0` keeps, negative drops, positive truncates.
    #[serde(default)]
    pub abbrev: i32,
}

/// Message filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Keep only entries matching one of these patterns.
    #[serde(default)]
    pub include: Vec<String>,

    /// Drop entries matching any of these patterns (ignored when `include` is set).
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A changelog group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Section title.
    #[serde(default)]
    pub title: String,

    /// Pattern matched against the full entry; absent for the catch-all group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexp: Option<String>,

    /// Display order (ascending).
    #[serde(default)]
    pub order: i32,
}

impl GroupConfig {
    /// Returns the group pattern, treating an empty pattern as absent.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.regexp.as_deref().filter(|p| !p.is_empty())
    }
}

/// Entry sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortDirection {
    /// Keep the order of the log source.
    #[default]
    Unspecified,
    /// Ascending by message.
    Asc,
    /// Descending by message.
    Desc,
}

impl SortDirection {
    /// Returns the configuration spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unspecified),
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ConfigError::InvalidSort(other.to_string())),
        }
    }
}

impl TryFrom<String> for SortDirection {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortDirection> for String {
    fn from(value: SortDirection) -> Self {
        value.as_str().to_string()
    }
}

/// Where commit lines come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceKind {
    /// Local `git log`.
    #[default]
    Git,
    /// GitHub compare API.
    Github,
}

impl SourceKind {
    /// Returns the configuration spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Github => "github",
        }
    }

    /// Returns true if this source needs an API token.
    #[must_use]
    pub fn needs_token(self) -> bool {
        matches!(self, Self::Github)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "git" => Ok(Self::Git),
            "github" => Ok(Self::Github),
            other => Err(ConfigError::InvalidSource(other.to_string())),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SourceKind> for String {
    fn from(value: SourceKind) -> Self {
        value.as_str().to_string()
    }
}

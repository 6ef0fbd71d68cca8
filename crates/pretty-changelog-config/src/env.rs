//! Environment snapshot.

use std::collections::BTreeMap;

use tracing::debug;

/// Immutable snapshot of the process environment merged with config `env`.
///
/// Built once at startup; components read variables from here instead of the
/// live process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Captures the process environment and overlays the given `KEY=VALUE` entries.
    #[must_use]
    pub fn capture(overrides: &[String]) -> Self {
        let mut env = Self::from_pairs(std::env::vars());
        env.extend_entries(overrides);
        env
    }

    /// Builds an environment from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Overlays `KEY=VALUE` entries; malformed entries are skipped.
    pub fn extend_entries(&mut self, entries: &[String]) {
        for entry in entries {
            match entry.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    self.vars.insert(key.to_string(), value.to_string());
                }
                _ => debug!(%entry, "skipping malformed env entry"),
            }
        }
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Iterates over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Input value selecting the embedded default configuration.
pub const EMBEDDED_SENTINEL: &str = "embed";

/// Embedded default configuration.
pub const EMBEDDED_CONFIG: &str = include_str!("../defaults/changelog.yaml");

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Loads the embedded default configuration.
///
/// # Errors
///
/// Returns an error if the embedded file does not parse.
pub fn load_embedded() -> ConfigResult<Config> {
    debug!("loading embedded configuration");
    parse(EMBEDDED_CONFIG)
}

/// Loads configuration from a process input value.
///
/// An empty value or [`EMBEDDED_SENTINEL`] selects the embedded default,
/// anything else is a file path.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or parsed.
pub fn load_from_input(input: &str) -> ConfigResult<Config> {
    match input.trim() {
        "" | EMBEDDED_SENTINEL => load_embedded(),
        path => load_config(path),
    }
}

fn parse(content: &str) -> ConfigResult<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortDirection, SourceKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/changelog.yaml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("changelog.yaml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("changelog.yaml");
        fs::write(
            &config_path,
            "changelog:\n  sort: desc\n  abbrev: 7\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.sort, SortDirection::Desc);
        assert_eq!(config.changelog.abbrev, 7);
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("changelog.yaml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("changelog.yaml");
        fs::write(&config_path, "changelog: [unclosed").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidYaml(_))));
    }

    #[test]
    fn test_load_config_invalid_sort_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("changelog.yaml");
        fs::write(&config_path, "changelog:\n  sort: random\n").unwrap();

        let err = load_config(&config_path).unwrap_err();
        assert!(err.to_string().contains("invalid sort direction"));
    }

    #[test]
    fn test_load_embedded() {
        let config = load_embedded().unwrap();
        assert_eq!(config.changelog.source, SourceKind::Git);
        assert_eq!(config.changelog.sort, SortDirection::Asc);
        assert_eq!(config.changelog.groups.len(), 3);
        assert_eq!(config.changelog.groups[2].pattern(), None);
        assert!(!config.changelog.filters.exclude.is_empty());
    }

    #[test]
    fn test_load_from_input_sentinel() {
        let from_sentinel = load_from_input(EMBEDDED_SENTINEL).unwrap();
        let from_empty = load_from_input("").unwrap();
        assert_eq!(from_sentinel, load_embedded().unwrap());
        assert_eq!(from_empty, from_sentinel);
    }

    #[test]
    fn test_load_from_input_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yml");
        fs::write(&config_path, "changelog:\n  use: github\n").unwrap();

        let config = load_from_input(config_path.to_str().unwrap()).unwrap();
        assert_eq!(config.changelog.source, SourceKind::Github);
    }
}

//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid YAML syntax or schema.
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Unknown `changelog.sort` value.
    #[error("invalid sort direction: {0:?}")]
    InvalidSort(String),

    /// Unknown `changelog.use` value.
    #[error("invalid changelog.use: {0:?}")]
    InvalidSource(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/changelog.yaml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /path/to/changelog.yaml"
        );
    }

    #[test]
    fn test_invalid_sort_display() {
        let err = ConfigError::InvalidSort("up".to_string());
        assert_eq!(err.to_string(), "invalid sort direction: \"up\"");
    }

    #[test]
    fn test_invalid_source_display() {
        let err = ConfigError::InvalidSource("gitlab".to_string());
        assert_eq!(err.to_string(), "invalid changelog.use: \"gitlab\"");
    }
}

//! Configuration management for pretty-changelog.
//!
//! This crate handles loading the YAML configuration (or the embedded default)
//! and assembling the immutable environment snapshot used by the rest of the run.

mod env;
mod error;
mod loader;
mod schema;

pub use env::Environment;
pub use error::{ConfigError, ConfigResult};
pub use loader::{EMBEDDED_CONFIG, EMBEDDED_SENTINEL, load_config, load_embedded, load_from_input};
pub use schema::{
    ChangelogConfig, Config, FiltersConfig, GroupConfig, SortDirection, SourceKind,
};

//! Git layer for pretty-changelog.
//!
//! This crate provides:
//! - [`GitRunner`]: runs the `git` executable with the environment snapshot
//! - [`RefQuery`]: the tag/commit queries the range resolver depends on
//! - [`RangeResolver`]: decides the current and previous release tags
//! - [`GitLogSource`]: the local `git log` implementation of `LogSource`

mod error;
mod query;
mod resolver;
mod runner;
mod source;

pub use error::{GitError, GitResult};
pub use query::RefQuery;
pub use resolver::{DEFAULT_TAG, GitInfo, RangeResolver};
pub use runner::{GitRunner, clean, clean_all_lines};
pub use source::GitLogSource;

#[cfg(test)]
mod test_support;

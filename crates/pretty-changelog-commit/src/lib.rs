//! Commit types for pretty-changelog.
//!
//! This crate provides the types shared by every stage of changelog generation:
//! - [`CommitLine`]: one `"<id> <message>"` entry as produced by a log source
//! - [`Abbrev`]: the identifier abbreviation policy
//! - [`ReleaseRange`]: the pair of references bounding a release
//! - [`LogSource`]: the capability that turns a range into commit lines

mod line;
mod range;
mod source;

pub use line::{Abbrev, CommitLine, parse_log};
pub use range::ReleaseRange;
pub use source::{LogSource, SourceError, SourceResult};

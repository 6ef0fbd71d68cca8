//! GitHub log source for pretty-changelog.
//!
//! Commits are read from the repository compare endpoint, page by page,
//! after waiting for enough API quota.

mod client;
mod error;
mod repo;
mod source;
mod throttle;

pub use client::{DEFAULT_API_URL, GithubClient, Quota};
pub use error::{GithubError, GithubResult};
pub use repo::{Repo, redact_url};
pub use source::GithubLogSource;
pub use throttle::{
    Clock, DEFAULT_MAX_WAITS, FALLBACK_WAIT, QUOTA_THRESHOLD, QuotaSource, SystemClock, Throttle,
};

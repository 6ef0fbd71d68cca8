//! Release range bounding a changelog.

/// The pair of references delimiting the commits of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRange {
    /// Previous release reference, if one exists.
    pub previous: Option<String>,

    /// Current release reference (never empty).
    pub current: String,

    /// First commit of the repository, used when there is no previous release.
    pub first_commit: String,
}

impl ReleaseRange {
    /// Creates a range without a previous release.
    #[must_use]
    pub fn new(current: impl Into<String>, first_commit: impl Into<String>) -> Self {
        Self {
            previous: None,
            current: current.into(),
            first_commit: first_commit.into(),
        }
    }

    /// Sets the previous release reference.
    #[must_use]
    pub fn with_previous(mut self, previous: impl Into<String>) -> Self {
        let previous = previous.into();
        self.previous = (!previous.is_empty()).then_some(previous);
        self
    }

    /// Returns the lower bound of the range.
    #[must_use]
    pub fn lower_bound(&self) -> &str {
        self.previous.as_deref().unwrap_or(&self.first_commit)
    }
}

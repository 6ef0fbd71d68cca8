//! Final document assembly.

/// Joins named sections into the final document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: Vec<String>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section.
    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Renders the sections separated by a blank line, ending in exactly one
    /// newline.
    pub fn render(&self) -> String {
        let mut out = self.sections.join("\n\n");
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

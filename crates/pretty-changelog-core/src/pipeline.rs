//! Changelog entry pipeline.

use pretty_changelog_commit::{Abbrev, CommitLine};
use pretty_changelog_config::{ChangelogConfig, SortDirection};
use tracing::debug;

use crate::group::{EntryGroup, distribute};
use crate::{CoreResult, EntryFilter};

const BULLET: &str = "* ";

/// Turns raw commit lines into the changelog body.
///
/// Stages run in a fixed order: filter, sort, abbreviate, group, render.
/// All patterns are compiled up front by [`EntryPipeline::from_config`].
#[derive(Debug, Clone)]
pub struct EntryPipeline {
    filter: EntryFilter,
    sort: SortDirection,
    abbrev: Abbrev,
    groups: Vec<EntryGroup>,
}

impl EntryPipeline {
    /// Builds a pipeline from the changelog configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter or group pattern does not compile.
    pub fn from_config(config: &ChangelogConfig) -> CoreResult<Self> {
        let groups = config
            .groups
            .iter()
            .map(EntryGroup::compile)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            filter: EntryFilter::from_config(&config.filters)?,
            sort: config.sort,
            abbrev: Abbrev::from(config.abbrev),
            groups,
        })
    }

    /// Runs every stage and returns the rendered body.
    pub fn run(&self, lines: Vec<CommitLine>) -> String {
        let total = lines.len();
        let mut entries = self.filter.apply(lines);
        debug!(total, kept = entries.len(), "filtered entries");

        self.sort(&mut entries);
        let entries: Vec<CommitLine> = entries
            .iter()
            .map(|line| line.abbreviate(self.abbrev))
            .collect();

        self.render(entries)
    }

    fn sort(&self, entries: &mut [CommitLine]) {
        match self.sort {
            SortDirection::Unspecified => {}
            SortDirection::Asc => entries.sort_by(|a, b| a.info().cmp(b.info())),
            SortDirection::Desc => entries.sort_by(|a, b| b.info().cmp(a.info())),
        }
    }

    fn render(&self, entries: Vec<CommitLine>) -> String {
        let mut out = vec![heading(2, "Changelog")];

        if self.groups.is_empty() {
            out.extend(bullets(&entries, true));
            return out.join("\n");
        }

        for section in distribute(&self.groups, entries) {
            if section.entries.is_empty() {
                continue;
            }
            debug!(title = %section.title, entries = section.entries.len(), "rendering group");
            out.push(heading(3, &section.title));
            out.extend(bullets(&section.entries, false));
        }

        out.join("\n")
    }
}

fn heading(level: usize, title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    format!("{} {title}", "#".repeat(level))
}

fn bullets(entries: &[CommitLine], skip_blank: bool) -> impl Iterator<Item = String> + '_ {
    entries
        .iter()
        .filter(move |line| !(skip_blank && line.is_blank()))
        .map(|line| format!("{BULLET}{line}"))
}

//! Sorting entries into titled sections.

use pretty_changelog_commit::CommitLine;
use pretty_changelog_config::GroupConfig;
use regex::Regex;

use crate::{CoreError, CoreResult};

/// A group with its pattern compiled.
#[derive(Debug, Clone)]
pub struct EntryGroup {
    title: String,
    pattern: Option<Regex>,
    order: i32,
}

impl EntryGroup {
    /// Compiles a configured group.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGroup`] naming the group title.
    pub fn compile(config: &GroupConfig) -> CoreResult<Self> {
        let pattern = config
            .pattern()
            .map(Regex::new)
            .transpose()
            .map_err(|source| CoreError::InvalidGroup {
                title: config.title.clone(),
                source,
            })?;

        Ok(Self {
            title: config.title.clone(),
            pattern,
            order: config.order,
        })
    }
}

/// Entries claimed by one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Group title.
    pub title: String,
    /// Group display order.
    pub order: i32,
    /// Claimed entries, in input order.
    pub entries: Vec<CommitLine>,
}

/// Distributes entries over groups in declaration order.
///
/// Each group claims the unclaimed entries whose full line matches its
/// pattern. The catch-all claims every remaining non-blank entry and ends
/// the distribution, as does running out of entries. Returned sections are
/// ordered by `order`, ties keeping declaration order.
pub fn distribute(groups: &[EntryGroup], lines: Vec<CommitLine>) -> Vec<Section> {
    let mut pool = lines;
    let mut sections = Vec::with_capacity(groups.len());

    for group in groups {
        let entries = match &group.pattern {
            None => std::mem::take(&mut pool)
                .into_iter()
                .filter(|line| !line.is_blank())
                .collect(),
            Some(re) => {
                let (claimed, rest): (Vec<_>, Vec<_>) =
                    pool.into_iter().partition(|line| re.is_match(line.as_str()));
                pool = rest;
                claimed
            }
        };

        sections.push(Section {
            title: group.title.clone(),
            order: group.order,
            entries,
        });

        if pool.is_empty() {
            break;
        }
    }

    sections.sort_by_key(|section| section.order);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(title: &str, regexp: Option<&str>, order: i32) -> EntryGroup {
        EntryGroup::compile(&GroupConfig {
            title: title.to_string(),
            regexp: regexp.map(ToString::to_string),
            order,
        })
        .unwrap()
    }

    fn lines(raw: &[&str]) -> Vec<CommitLine> {
        raw.iter().copied().map(CommitLine::from).collect()
    }

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_first_matching_group_claims() {
        let groups = [group("Fixes", Some("Fix"), 0), group("Bugs", Some("bug"), 1)];
        let sections = distribute(&groups, lines(&["abc123 Fix bug", "def456 Add feature"]));

        assert_eq!(sections[0].entries, lines(&["abc123 Fix bug"]));
        assert!(sections[1].entries.is_empty());
    }

    #[test]
    fn test_pattern_matches_full_line() {
        let groups = [group("By id", Some("^abc"), 0)];
        let sections = distribute(&groups, lines(&["abc123 Fix bug"]));
        assert_eq!(sections[0].entries.len(), 1);
    }

    #[test]
    fn test_catch_all_stops_distribution() {
        let groups = [
            group("Others", None, 9),
            group("Features", Some("Add"), 0),
        ];
        let sections = distribute(&groups, lines(&["abc123 Fix bug", "def456 Add feature"]));

        assert_eq!(titles(&sections), vec!["Others"]);
        assert_eq!(sections[0].entries.len(), 2);
    }

    #[test]
    fn test_catch_all_drops_blank_entries() {
        let groups = [group("Others", None, 0)];
        let sections = distribute(&groups, lines(&["abc123 Fix bug", ""]));
        assert_eq!(sections[0].entries, lines(&["abc123 Fix bug"]));
    }

    #[test]
    fn test_stops_when_pool_is_empty() {
        let groups = [
            group("All", Some("."), 0),
            group("Never", Some("Fix"), 1),
        ];
        let sections = distribute(&groups, lines(&["abc123 Fix bug"]));
        assert_eq!(titles(&sections), vec!["All"]);
    }

    #[test]
    fn test_sorted_by_order() {
        let groups = [
            group("Features", Some("Add"), 1),
            group("Fixes", Some("Fix"), 0),
        ];
        let sections = distribute(&groups, lines(&["abc123 Fix bug", "def456 Add feature"]));
        assert_eq!(titles(&sections), vec!["Fixes", "Features"]);
    }

    #[test]
    fn test_equal_order_keeps_declaration_order() {
        let groups = [
            group("B", Some("Fix"), 0),
            group("A", Some("Add"), 0),
            group("C", None, 0),
        ];
        let sections = distribute(
            &groups,
            lines(&["abc123 Fix bug", "def456 Add feature", "0a0a0a Tweak"]),
        );
        assert_eq!(titles(&sections), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_invalid_group_names_title() {
        let err = EntryGroup::compile(&GroupConfig {
            title: "Broken".to_string(),
            regexp: Some("(".to_string()),
            order: 0,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to group into \"Broken\""));
    }

    #[test]
    fn test_empty_regexp_is_catch_all() {
        let group = EntryGroup::compile(&GroupConfig {
            title: "Others".to_string(),
            regexp: Some(String::new()),
            order: 0,
        })
        .unwrap();
        assert!(group.pattern.is_none());
    }
}

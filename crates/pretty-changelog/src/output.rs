//! Output writers.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use pretty_changelog_config::Environment;

/// Environment variable naming the GitHub Actions output file.
const OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Writes the changelog document to `path`.
pub fn write_changelog(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote changelog");
    Ok(())
}

/// Appends a multi-line output to the GitHub Actions output file.
///
/// Does nothing when `GITHUB_OUTPUT` is not set.
pub fn write_action_output(env: &Environment, name: &str, value: &str) -> Result<()> {
    let Some(file) = env.get(OUTPUT_VAR).filter(|f| !f.is_empty()) else {
        debug!("{OUTPUT_VAR} not set, skipping action output");
        return Ok(());
    };

    let delimiter = delimiter();
    if value.contains(&delimiter) {
        bail!("output {name} contains its delimiter");
    }

    let mut out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("failed to open {file}"))?;
    write!(out, "{}", heredoc(name, value, &delimiter))
        .with_context(|| format!("failed to write {file}"))?;

    debug!(name, file, "set action output");
    Ok(())
}

fn delimiter() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("ghadelimiter_{}_{nanos:x}", std::process::id())
}

fn heredoc(name: &str, value: &str, delimiter: &str) -> String {
    let newline = if value.ends_with('\n') { "" } else { "\n" };
    format!("{name}<<{delimiter}\n{value}{newline}{delimiter}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_heredoc() {
        assert_eq!(
            heredoc("changelog", "## Changelog\n* a\n", "EOF"),
            "changelog<<EOF\n## Changelog\n* a\nEOF\n"
        );
        assert_eq!(heredoc("x", "value", "EOF"), "x<<EOF\nvalue\nEOF\n");
    }

    #[test]
    fn test_write_changelog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        write_changelog(&path, "## Changelog\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "## Changelog\n");
    }

    #[test]
    fn test_action_output_appends() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("output");
        fs::write(&file, "previous=1\n").unwrap();
        let env = Environment::from_pairs([(OUTPUT_VAR, file.to_str().unwrap())]);

        write_action_output(&env, "changelog", "## Changelog\n").unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.starts_with("previous=1\nchangelog<<ghadelimiter_"));
        assert!(content.contains("\n## Changelog\nghadelimiter_"));
    }

    #[test]
    fn test_action_output_skipped_without_variable() {
        write_action_output(&Environment::default(), "changelog", "x").unwrap();
    }
}

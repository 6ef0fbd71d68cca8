//! Generate command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use pretty_changelog_commit::LogSource;
use pretty_changelog_config::{EMBEDDED_SENTINEL, Environment, SourceKind, load_from_input};
use pretty_changelog_core::{EntryPipeline, Generator};
use pretty_changelog_git::{GitLogSource, GitRunner, RangeResolver, RefQuery};
use pretty_changelog_github::{
    DEFAULT_API_URL, GithubClient, GithubLogSource, Repo, redact_url,
};

use crate::output;

/// Environment variable GitHub Actions sets to the API root.
const API_URL_VAR: &str = "GITHUB_API_URL";

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Configuration file, or `embed` for the built-in configuration
    #[arg(short, long, env = "INPUT_CONFIG", default_value = EMBEDDED_SENTINEL)]
    pub config: String,

    /// Where commits are read from: git or github (overrides `changelog.use`)
    #[arg(long = "use", env = "INPUT_USE", value_name = "SOURCE")]
    pub source: Option<String>,

    /// API token, required when reading from github
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Tag that must never be picked as a release (repeatable)
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    /// Output file
    #[arg(short, long, default_value = "CHANGELOG.md")]
    pub output: PathBuf,
}

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let mut config = load_from_input(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config))?;

    if let Some(source) = args.source.as_deref().filter(|s| !s.is_empty()) {
        config.changelog.source = source.parse().context("invalid --use value")?;
    }
    let kind = config.changelog.source;

    let token = args.token.filter(|token| !token.is_empty());
    if kind.needs_token() && token.is_none() {
        println!("token is required for use={kind}");
        return Ok(());
    }

    let pipeline =
        EntryPipeline::from_config(&config.changelog).context("invalid changelog configuration")?;

    let env = Environment::capture(&config.env);
    let workdir = std::env::current_dir().context("failed to read current directory")?;
    let runner = GitRunner::new(workdir, env.clone());

    let git = RangeResolver::new(&runner)
        .with_excluding(args.exclude_tags)
        .resolve()?;
    info!(
        tag = %git.current_tag,
        previous = git.previous_tag.as_deref().unwrap_or("-"),
        commit = %git.commit,
        "resolved release"
    );

    let source: Box<dyn LogSource> = match kind {
        SourceKind::Git => Box::new(GitLogSource::new(runner)),
        SourceKind::Github => Box::new(github_source(
            &runner,
            &env,
            token.unwrap_or_default(),
        )?),
    };

    let document = Generator::new(pipeline, source.as_ref()).generate(&git)?;

    output::write_changelog(&args.output, &document)?;
    output::write_action_output(&env, "changelog", &document)?;
    print!("{document}");

    Ok(())
}

fn github_source(runner: &GitRunner, env: &Environment, token: String) -> Result<GithubLogSource> {
    let url = runner.remote_url()?;
    info!(url = %redact_url(&url), "reading commits from remote");

    let repo = Repo::from_url(&url)?;
    repo.check_scm()?;

    let api_url = env.get(API_URL_VAR).unwrap_or(DEFAULT_API_URL);
    let client = GithubClient::with_base_url(token, api_url)
        .context("failed to create GitHub client")?;

    Ok(GithubLogSource::new(client, repo))
}

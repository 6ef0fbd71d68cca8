//! CLI definition.

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Generate a grouped Markdown changelog from the commits between two release tags.
#[derive(Debug, Parser)]
#[command(name = "pretty-changelog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: commands::generate::GenerateArgs,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        commands::generate::run(self.generate)
    }
}

//! Command-line interface wiring for bookmood.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod enrich;
pub mod profile;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Book emotion enrichment toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Enrich(args) => enrich::run(args, settings).await,
            Commands::Profile(args) => profile::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enrich a book table with per-emotion score columns.
    Enrich(enrich::Args),
    /// Score a single description and print its profile as JSON.
    Profile(profile::Args),
}

/// Handling of rows whose description yields zero sentences.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EmptyPolicy {
    /// Abort the run, naming the offending document.
    Fail,
    /// Assign the neutral default profile and continue.
    Neutral,
}

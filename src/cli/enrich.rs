//! CLI entry-point for table enrichment.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{cli::EmptyPolicy, config::Settings, data::books::BookTable, nlp};

/// Args for the `enrich` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Input CSV with at least an identifier and a description column.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination CSV for the enriched rows.
    #[arg(long)]
    pub output: PathBuf,
    /// Header name of the document identifier column.
    #[arg(long, default_value = "isbn13")]
    pub id_column: String,
    /// Header name of the description column.
    #[arg(long, default_value = "description")]
    pub description_column: String,
    /// Handling of empty or whitespace-only descriptions.
    #[arg(long, default_value = "fail", value_enum)]
    pub empty_policy: EmptyPolicy,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let table = BookTable::load(&args.input, &args.id_column, &args.description_column)?;
    let profiles = nlp::score_documents(&settings, &table, args.empty_policy).await?;
    table.write_enriched(&args.output, &profiles)
}

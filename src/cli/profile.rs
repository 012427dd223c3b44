//! CLI entry-point for scoring a single description.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::config::Settings;
use crate::emotion::aggregate;
use crate::error::EmotionError;
use crate::nlp::{classifier::EmotionClassifier, sentences};

/// Args for the `profile` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Description text to score.
    pub text: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let sents = sentences::split_sentences(&args.text);
    if sents.is_empty() {
        return Err(EmotionError::EmptyDocument).context("input text has no sentences");
    }

    let clf = EmotionClassifier::new(&settings)?;
    let scores = clf.score_sentences(&sents).await?;
    let profile = aggregate::max_profile(&scores)?;

    let mut out = serde_json::Map::new();
    for (label, score) in profile.labeled() {
        out.insert(label.as_str().to_string(), score.into());
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(out))?
    );
    Ok(())
}

//! Natural language processing orchestration for table enrichment.

pub mod classifier;
pub mod sentences;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::cli::EmptyPolicy;
use crate::config::Settings;
use crate::data::books::BookTable;
use crate::emotion::{aggregate, EmotionProfile};
use crate::error::EmotionError;

/// Score every document in the table, returning profiles keyed by document
/// id in table order.
///
/// Documents are processed strictly one at a time; each document's sentences
/// go to the classifier as one batch, and a classifier failure aborts the
/// whole run.
pub async fn score_documents(
    settings: &Settings,
    table: &BookTable,
    policy: EmptyPolicy,
) -> Result<IndexMap<String, EmotionProfile>> {
    let clf = classifier::EmotionClassifier::new(settings)?;
    let mut profiles = IndexMap::with_capacity(table.len());
    for doc in table.documents() {
        let sents = sentences::split_sentences(&doc.description);
        let profile = if sents.is_empty() {
            match policy {
                EmptyPolicy::Fail => {
                    return Err(EmotionError::EmptyDocument).with_context(|| {
                        format!("document `{}` has an empty description", doc.id)
                    });
                }
                EmptyPolicy::Neutral => {
                    warn!(id = %doc.id, "empty description; assigning neutral profile");
                    EmotionProfile::neutral_default()
                }
            }
        } else {
            let scores = clf
                .score_sentences(&sents)
                .await
                .with_context(|| format!("scoring document `{}`", doc.id))?;
            aggregate::max_profile(&scores)
                .with_context(|| format!("aggregating document `{}`", doc.id))?
        };
        profiles.insert(doc.id.clone(), profile);
    }
    info!(documents = profiles.len(), "scored all documents");
    Ok(profiles)
}

//! Domain error types shared across the pipeline.

use thiserror::Error;

use crate::emotion::EmotionLabel;

/// Failures with a precise cause in the enrichment pipeline.
#[derive(Debug, Error)]
pub enum EmotionError {
    /// A description split into zero sentences under the fail policy.
    #[error("no sentences to score")]
    EmptyDocument,
    /// The classifier omitted one of the seven labels for a sentence.
    #[error("classifier output is missing label `{label}`")]
    MissingLabel { label: EmotionLabel },
    /// The classifier emitted a label outside the fixed set.
    #[error("classifier output contains unknown label `{label}`")]
    UnknownLabel { label: String },
    /// The classifier emitted the same label twice for a sentence.
    #[error("classifier output repeats label `{label}`")]
    DuplicateLabel { label: EmotionLabel },
    /// A score fell outside the unit interval.
    #[error("score {score} for label `{label}` is outside [0, 1]")]
    ScoreOutOfRange { label: EmotionLabel, score: f64 },
    /// The classifier answered with the wrong number of score vectors.
    #[error("classifier returned {got} score vectors for {expected} sentences")]
    BatchArity { expected: usize, got: usize },
    /// The input table lacks a required column.
    #[error("input table has no `{name}` column")]
    MissingColumn { name: String },
    /// The same document identifier occurred on two input rows.
    #[error("document id `{id}` appears more than once in the input table")]
    DuplicateDocument { id: String },
    /// An identifier was present on only one side of the profile merge.
    #[error("merge key `{id}` is present in {present} but absent from {absent}")]
    MergeKey {
        id: String,
        present: &'static str,
        absent: &'static str,
    },
}

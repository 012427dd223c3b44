//! Emotion label set and per-sentence / per-document score containers.

pub mod aggregate;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EmotionError;

/// The fixed set of emotion categories produced by the classifier.
///
/// Declared once and shared by the aggregator, the output schema, and the
/// test suite; never inferred from classifier output at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// Canonical label ordering, also the order of the appended CSV columns.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Anger,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Name-based lookup; classifier output ordering is never trusted.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(needle))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One label/score entry as emitted by the classifier for a sentence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabeledScore {
    pub label: String,
    pub score: f64,
}

/// Scores for all seven labels on a single sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScores {
    scores: [f64; EmotionLabel::COUNT],
}

impl SentenceScores {
    /// Build from classifier output, matching labels by name rather than by
    /// position. Every label must appear exactly once with a score in [0, 1].
    pub fn from_labeled(entries: &[LabeledScore]) -> Result<Self, EmotionError> {
        let mut scores = [0.0; EmotionLabel::COUNT];
        let mut seen = [false; EmotionLabel::COUNT];
        for entry in entries {
            let label = EmotionLabel::from_name(&entry.label).ok_or_else(|| {
                EmotionError::UnknownLabel {
                    label: entry.label.clone(),
                }
            })?;
            if seen[label.index()] {
                return Err(EmotionError::DuplicateLabel { label });
            }
            if !(0.0..=1.0).contains(&entry.score) {
                return Err(EmotionError::ScoreOutOfRange {
                    label,
                    score: entry.score,
                });
            }
            scores[label.index()] = entry.score;
            seen[label.index()] = true;
        }
        for label in EmotionLabel::ALL {
            if !seen[label.index()] {
                return Err(EmotionError::MissingLabel { label });
            }
        }
        Ok(Self { scores })
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.scores[label.index()]
    }
}

/// Aggregated per-document scores, one value per label.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionProfile {
    scores: [f64; EmotionLabel::COUNT],
}

impl EmotionProfile {
    /// Profile assigned under the `neutral` empty-description policy.
    pub fn neutral_default() -> Self {
        let mut scores = [0.0; EmotionLabel::COUNT];
        scores[EmotionLabel::Neutral.index()] = 1.0;
        Self { scores }
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.scores[label.index()]
    }

    /// Label/score pairs in canonical label order.
    pub fn labeled(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

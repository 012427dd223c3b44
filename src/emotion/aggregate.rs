//! Per-document reduction of sentence score vectors.

use crate::emotion::{EmotionLabel, EmotionProfile, SentenceScores};
use crate::error::EmotionError;

/// Reduce a document's sentence scores to one per-label maximum.
///
/// The reduction is commutative: neither sentence order nor the label order
/// inside each vector affects the result. Degenerate vectors (e.g. from a
/// punctuation-only sentence) participate like any other. An empty document
/// is an error; callers decide whether to surface it or substitute an
/// explicit default.
pub fn max_profile(sentences: &[SentenceScores]) -> Result<EmotionProfile, EmotionError> {
    if sentences.is_empty() {
        return Err(EmotionError::EmptyDocument);
    }

    let mut scores = [0.0f64; EmotionLabel::COUNT];
    for sentence in sentences {
        for (slot, label) in scores.iter_mut().zip(EmotionLabel::ALL) {
            *slot = slot.max(sentence.get(label));
        }
    }
    Ok(EmotionProfile { scores })
}

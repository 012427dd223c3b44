//! Coarse sentence splitting for description text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Split description text into coarse sentences on terminal punctuation.
///
/// Fragments are trimmed and empty ones dropped, so punctuation-only or
/// whitespace-only input yields an empty vector.
pub fn split_sentences(text: &str) -> Vec<String> {
    static BOUNDARY: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[.!?]+\s+|[.!?]+$").expect("valid regex"));
    BOUNDARY
        .split(text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

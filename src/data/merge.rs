//! Strict identifier join between table rows and aggregated profiles.

use std::collections::HashSet;

use csv::StringRecord;
use indexmap::IndexMap;

use crate::data::books::BookTable;
use crate::emotion::EmotionProfile;
use crate::error::EmotionError;

/// Pair each table row with its profile by document id.
///
/// Both sides must cover exactly the same identifiers. An id present on one
/// side only is a hard failure rather than a dropped row, so the output
/// always has exactly one row per input row.
pub fn join_profiles<'a>(
    table: &'a BookTable,
    profiles: &'a IndexMap<String, EmotionProfile>,
) -> Result<Vec<(&'a StringRecord, &'a EmotionProfile)>, EmotionError> {
    let table_ids: HashSet<&str> = table.documents().iter().map(|d| d.id.as_str()).collect();
    for id in profiles.keys() {
        if !table_ids.contains(id.as_str()) {
            return Err(EmotionError::MergeKey {
                id: id.clone(),
                present: "profiles",
                absent: "table",
            });
        }
    }

    let mut joined = Vec::with_capacity(table.len());
    for (record, doc) in table.rows() {
        let profile = profiles.get(&doc.id).ok_or_else(|| EmotionError::MergeKey {
            id: doc.id.clone(),
            present: "table",
            absent: "profiles",
        })?;
        joined.push((record, profile));
    }
    Ok(joined)
}

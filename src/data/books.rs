//! Book table loading and enriched output writing.

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use csv::StringRecord;
use indexmap::IndexMap;
use tracing::info;

use crate::data::merge;
use crate::emotion::{EmotionLabel, EmotionProfile};
use crate::error::EmotionError;

/// One input row with its identifier and description resolved.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub description: String,
}

/// The loaded input table: original records plus resolved documents,
/// in file order.
#[derive(Debug)]
pub struct BookTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
    documents: Vec<Document>,
}

impl BookTable {
    /// Load a CSV, resolving the identifier and description columns by
    /// header name. Duplicate identifiers are rejected up front so the later
    /// merge cannot silently collapse rows.
    pub fn load(path: &Path, id_column: &str, description_column: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("opening input table {}", path.display()))?;
        let headers = reader.headers()?.clone();
        let id_idx = column_index(&headers, id_column)?;
        let desc_idx = column_index(&headers, description_column)?;

        let mut records = Vec::new();
        let mut documents = Vec::new();
        let mut seen = HashSet::new();
        for result in reader.records() {
            let record = result?;
            let id = record.get(id_idx).unwrap_or("").trim().to_string();
            if !seen.insert(id.clone()) {
                return Err(EmotionError::DuplicateDocument { id }.into());
            }
            let description = record.get(desc_idx).unwrap_or("").to_string();
            documents.push(Document { id, description });
            records.push(record);
        }
        info!(rows = records.len(), path = %path.display(), "loaded book table");
        Ok(Self {
            headers,
            records,
            documents,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Records paired with their resolved documents, in file order.
    pub fn rows(&self) -> impl Iterator<Item = (&StringRecord, &Document)> {
        self.records.iter().zip(self.documents.iter())
    }

    /// Write the original rows with seven emotion columns appended, one per
    /// label in canonical order. Row identity is preserved via a strict
    /// identifier merge.
    pub fn write_enriched(
        &self,
        path: &Path,
        profiles: &IndexMap<String, EmotionProfile>,
    ) -> Result<()> {
        let joined = merge::join_profiles(self, profiles)?;

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating output table {}", path.display()))?;
        let mut header = self.headers.clone();
        for label in EmotionLabel::ALL {
            header.push_field(label.as_str());
        }
        writer.write_record(&header)?;

        for (record, profile) in joined {
            let mut row = record.clone();
            for label in EmotionLabel::ALL {
                row.push_field(&profile.get(label).to_string());
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = self.len(), "wrote enriched table");
        Ok(())
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, EmotionError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| EmotionError::MissingColumn {
            name: name.to_string(),
        })
}

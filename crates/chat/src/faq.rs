//! FAQ table loading and exact-match lookup.
//!
//! The table comes from a two-column CSV file (question, answer) without a
//! header row. Questions are stored lowercased and trimmed; later rows win
//! over earlier ones with the same question. Rows that do not have exactly
//! two fields are skipped.

use faqbot_core::{AppError, AppResult};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Immutable question → answer mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqTable {
    entries: HashMap<String, String>,
}

impl FaqTable {
    /// An empty table, used when no FAQ file is available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table from a CSV file.
    ///
    /// # Errors
    /// - `AppError::FaqNotFound` if the file does not exist
    /// - `AppError::Faq` if it exists but cannot be opened
    pub fn load(path: &Path) -> AppResult<Self> {
        tracing::debug!("Loading FAQ table from {:?}", path);

        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::FaqNotFound(path.to_path_buf()),
            _ => AppError::Faq(format!("Failed to open FAQ file {:?}: {}", path, e)),
        })?;

        let table = Self::from_reader(file);
        tracing::info!("Loaded {} FAQ entries from {:?}", table.len(), path);
        Ok(table)
    }

    /// Build the table from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping unreadable FAQ row {}: {}", index + 1, e);
                    continue;
                }
            };

            if record.len() != 2 {
                tracing::debug!(
                    "Skipping FAQ row {} with {} fields",
                    index + 1,
                    record.len()
                );
                continue;
            }

            entries.insert(normalize(&record[0]), record[1].to_string());
        }

        Self { entries }
    }

    /// Exact, case-insensitive lookup.
    ///
    /// The question is lowercased but not trimmed.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.entries
            .get(&question.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (normalized question, answer) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl FromIterator<(String, String)> for FaqTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(question, answer)| (normalize(&question), answer))
                .collect(),
        }
    }
}

fn normalize(question: &str) -> String {
    question.trim().to_lowercase()
}

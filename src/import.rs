//! One-shot CSV importer
//!
//! Reads a journalist CSV export (UTF-8, header row with the original
//! Swedish column names) and replaces the store's table contents in one
//! transaction. Rows missing a name or subjects value are dropped. A
//! missing or unreadable source is fatal to the batch job and leaves
//! prior persisted state untouched, because the replace transaction
//! never begins.

use crate::record::NewRecord;
use crate::store::{DirectoryStore, StoreError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from the import batch job
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read source file '{path}': {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("source is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Data rows read from the source.
    pub read: usize,
    /// Rows discarded for missing name or subjects.
    pub dropped: usize,
    /// Rows written to the store.
    pub written: usize,
}

/// Ingest a CSV source into the store, replacing prior contents.
pub fn import_csv(
    path: impl AsRef<Path>,
    store: &impl DirectoryStore,
) -> Result<ImportSummary, ImportError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ImportError::SourceUnreadable {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let required = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(ImportError::MissingColumn(name))
    };
    let optional = |name: &str| headers.iter().position(|h| h == name);

    let idx_name = required("Namn")?;
    let idx_subjects = required("Ämnesområden")?;
    let idx_category = optional("Kategori");
    let idx_platforms = optional("Typiska Plattformar");
    let idx_analysis = optional("Analys av Position");

    let mut rows = Vec::new();
    let mut read = 0usize;
    let mut dropped = 0usize;

    for result in reader.records() {
        let row = result?;
        read += 1;

        let name = row.get(idx_name).unwrap_or("").trim();
        let subjects = row.get(idx_subjects).unwrap_or("").trim();
        if name.is_empty() || subjects.is_empty() {
            warn!(row = read, "dropping row with missing name or subjects");
            dropped += 1;
            continue;
        }

        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        rows.push(NewRecord {
            name: name.to_string(),
            category: field(idx_category),
            subjects: subjects.to_string(),
            platforms: field(idx_platforms),
            analysis: field(idx_analysis),
        });
    }

    let written = store.replace_all(&rows)?;
    let summary = ImportSummary {
        read,
        dropped,
        written,
    };
    info!(
        read = summary.read,
        dropped = summary.dropped,
        written = summary.written,
        "import complete"
    );
    Ok(summary)
}

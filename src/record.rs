//! Journalist record types shared by the store, importer, and graph builder.

use serde::Serialize;

/// Stable store-assigned identifier for a record.
///
/// Wraps the SQLite rowid. An identifier addresses the same row across
/// process restarts and re-fetches; it is never derived from a record's
/// position in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One journalist row, tagged with its stable identifier.
///
/// Field names are English; the persisted column names keep the original
/// Swedish headers (see the store module) so existing databases and CSV
/// exports continue to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Store-assigned identifier, exposed alongside the declared columns.
    pub id: RecordId,
    /// Display name (`Namn`). Required, non-empty.
    pub name: String,
    /// Free-text classification (`Kategori`).
    pub category: Option<String>,
    /// Comma-delimited subject tags (`Ämnesområden`). Required at creation.
    pub subjects: String,
    /// Free-text platforms field (`Typiska Plattformar`).
    pub platforms: Option<String>,
    /// Free-text position analysis (`Analys av Position`). Searchable.
    pub analysis: Option<String>,
}

/// A row about to be written by the importer. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub category: Option<String>,
    pub subjects: String,
    pub platforms: Option<String>,
    pub analysis: Option<String>,
}

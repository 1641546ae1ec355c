//! Store trait definitions

use crate::record::{NewRecord, Record, RecordId};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file cannot be opened or the connection failed.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    /// The journalists table does not exist yet (first-run condition).
    #[error("table '{0}' does not exist; run the importer first")]
    SchemaMissing(&'static str),

    #[error("no record with id {0}")]
    RecordNotFound(RecordId),

    /// A mutation failed at the SQLite layer. The row is left untouched.
    #[error("write failed: {0}")]
    WriteFailed(#[source] rusqlite::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Substring-matching policy for `search`.
///
/// SQLite `LIKE` folds case for ASCII letters only; `instr` compares
/// bytes exactly. The original dataset was queried with `LIKE`, so
/// case-insensitive is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

/// Trait for journalist directory storage backends
///
/// Implementations must be thread-safe (Send + Sync). Single-row writes
/// rely on the backend's native atomicity; concurrent updates against the
/// same id are last-writer-wins.
pub trait DirectoryStore: Send + Sync {
    /// Return every record, each tagged with its stable id.
    fn scan(&self) -> StoreResult<Vec<Record>>;

    /// Return records whose subjects or analysis contain `term` as a
    /// substring. An empty or whitespace-only term yields an empty vec.
    fn search(&self, term: &str) -> StoreResult<Vec<Record>>;

    /// Point lookup by id. Used to validate existence before mutating.
    fn get(&self, id: RecordId) -> StoreResult<Option<Record>>;

    /// Overwrite the subjects field of one record in a single statement.
    fn update_subjects(&self, id: RecordId, new_subjects: &str) -> StoreResult<()>;

    /// Drop and recreate the table with the given rows in one transaction.
    /// Returns the number of rows written.
    fn replace_all(&self, rows: &[NewRecord]) -> StoreResult<usize>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: DirectoryStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StoreResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StoreResult<Self>;
}

//! Consumer-facing directory API
//!
//! `Directory` is the single entry point for front ends: cached full
//! scan, substring search, tag merge with write-back, and graph
//! construction. Front ends call these methods and never reach the
//! store or the scan cache directly; identifiers from untrusted input
//! are validated for existence before any mutation.

use crate::graph::SubjectGraph;
use crate::record::{Record, RecordId};
use crate::store::{DirectoryStore, ScanCache, StoreError, StoreResult};
use crate::tags::{self, TagError};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by directory operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The journalist directory: a store plus the explicit scan cache.
pub struct Directory<S> {
    store: S,
    cache: ScanCache,
}

impl<S: DirectoryStore> Directory<S> {
    /// Wrap a store with the default freshness window.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: ScanCache::default(),
        }
    }

    /// Wrap a store with a custom freshness window.
    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self {
            store,
            cache: ScanCache::new(ttl),
        }
    }

    /// Full listing, served from the scan cache while fresh.
    pub fn scan(&self) -> StoreResult<Vec<Record>> {
        if let Some(records) = self.cache.get() {
            debug!(records = records.len(), "scan served from cache");
            return Ok(records);
        }
        let records = self.store.scan()?;
        self.cache.fill(records.clone());
        Ok(records)
    }

    /// Substring search over subjects and analysis. Uncached.
    pub fn search(&self, term: &str) -> StoreResult<Vec<Record>> {
        self.store.search(term)
    }

    /// Merge one subject tag into a record and write it back.
    ///
    /// Validates that the record exists, merges via the tag model, and
    /// overwrites the subjects field in a single statement. On success the
    /// scan cache is invalidated so subsequent reads observe the write;
    /// on any failure nothing is written. Returns the updated subjects
    /// string.
    pub fn add_subject(&self, id: RecordId, tag: &str) -> DirectoryResult<String> {
        let record = self
            .store
            .get(id)?
            .ok_or(StoreError::RecordNotFound(id))?;
        let merged = tags::merge_tag(&record.subjects, tag)?;
        self.store.update_subjects(id, &merged)?;
        self.cache.invalidate();
        debug!(%id, subjects = %merged, "subject merged");
        Ok(merged)
    }

    /// Build the journalist-to-subject graph from the full record set.
    pub fn graph(&self) -> StoreResult<SubjectGraph> {
        Ok(SubjectGraph::build(&self.scan()?))
    }

    /// Direct access to the underlying store, for the importer.
    pub fn store(&self) -> &S {
        &self.store
    }
}

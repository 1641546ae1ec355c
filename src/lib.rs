//! Pressregister: Journalist Directory Core
//!
//! A single-table SQLite directory of journalist records with a
//! free-text subject-tag model, a bipartite journalist-to-subject graph
//! for visualization, and a one-shot CSV importer.
//!
//! # Core Concepts
//!
//! - **Records**: one row per journalist, addressed by a stable rowid
//! - **Tags**: normalized views over the comma-delimited subjects field
//! - **Graph**: journalists × subjects with set semantics, a rendering input
//! - **Directory**: the single consumer-facing entry point, owning the
//!   time-bounded scan cache
//!
//! # Example
//!
//! ```
//! use pressregister::{Directory, OpenStore, SqliteStore};
//!
//! let store = SqliteStore::open_in_memory().unwrap();
//! let directory = Directory::new(store);
//! // First run: nothing imported yet, so the scan reports a missing schema.
//! assert!(directory.scan().is_err());
//! ```

mod directory;
pub mod graph;
pub mod import;
mod record;
pub mod store;
pub mod tags;

pub use directory::{Directory, DirectoryError, DirectoryResult};
pub use graph::{GraphEdge, GraphNode, SubjectGraph};
pub use import::{import_csv, ImportError, ImportSummary};
pub use record::{NewRecord, Record, RecordId};
pub use store::{
    DirectoryStore, OpenStore, ScanCache, SearchMode, SqliteStore, StoreError, StoreResult,
};
pub use tags::{merge_tag, normalize, parse_tags, TagError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

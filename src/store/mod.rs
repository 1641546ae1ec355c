//! Storage for the journalist directory
//!
//! The directory supports multiple storage backends through the
//! `DirectoryStore` trait. The primary implementation is `SqliteStore`.

mod cache;
mod sqlite;
mod traits;

pub use cache::{ScanCache, DEFAULT_TTL};
pub use sqlite::SqliteStore;
pub use traits::{DirectoryStore, OpenStore, SearchMode, StoreError, StoreResult};

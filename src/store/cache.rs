//! Time-bounded cache of the full scan result.
//!
//! Explicit process-wide state with a documented lifecycle: populated
//! lazily on the first scan, invalidated on every successful subjects
//! update, expired after the freshness window. Read-your-writes comes
//! from invalidation, not from waiting out the TTL.

use crate::record::Record;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default freshness window, matching the original tool's 600-second TTL.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Cache of the last full scan.
///
/// Time is passed explicitly through the `_at` variants so tests control
/// expiry without sleeping.
#[derive(Debug)]
pub struct ScanCache {
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    records: Vec<Record>,
    filled_at: Instant,
}

impl ScanCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// The configured freshness window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached records if still fresh.
    pub fn get(&self) -> Option<Vec<Record>> {
        self.get_at(Instant::now())
    }

    /// Return the cached records if still fresh as of `now`.
    pub fn get_at(&self, now: Instant) -> Option<Vec<Record>> {
        let slot = self.slot.lock().unwrap();
        match slot.as_ref() {
            Some(entry) if now.duration_since(entry.filled_at) < self.ttl => {
                Some(entry.records.clone())
            }
            _ => None,
        }
    }

    /// Store a fresh scan result.
    pub fn fill(&self, records: Vec<Record>) {
        self.fill_at(records, Instant::now());
    }

    /// Store a scan result stamped at `now`.
    pub fn fill_at(&self, records: Vec<Record>, now: Instant) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(CacheEntry {
            records,
            filled_at: now,
        });
    }

    /// Drop the cached result so the next read goes to the store.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap();
        *slot = None;
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

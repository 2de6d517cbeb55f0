//! Per-name result cache with a fixed time-to-live.
//!
//! Entries are only ever replaced wholesale by `put`; stale ones are left in
//! place until the next successful resolution of the same name overwrites
//! them. There is no size bound and no background sweep.

use dashmap::DashMap;
use rootwalk_application::ports::ResolutionCache;
use rootwalk_domain::ResolutionResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// Expiry used when `now + ttl` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Arc<[String]>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Keyed by queried name only, never by record type.
#[derive(Debug)]
pub struct RecordCache {
    entries: DashMap<Arc<str>, CacheEntry>,
    ttl: Duration,
}

impl RecordCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn expiry_from(&self, now: Instant) -> Instant {
        now.checked_add(self.ttl)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now)
    }

    /// Expiry of the stored entry for `name`, fresh or not.
    pub fn expires_at(&self, name: &str) -> Option<Instant> {
        self.entries.get(name).map(|entry| entry.expires_at)
    }
}

impl ResolutionCache for RecordCache {
    fn get(&self, name: &str) -> Option<ResolutionResult> {
        let entry = self.entries.get(name)?;

        if !entry.is_fresh_at(Instant::now()) {
            trace!(name = %name, "Cache entry expired");
            return None;
        }

        Some(entry.records.to_vec())
    }

    fn put(&self, name: &str, result: ResolutionResult) {
        let entry = CacheEntry {
            records: Arc::from(result),
            expires_at: self.expiry_from(Instant::now()),
        };
        self.entries.insert(Arc::from(name), entry);
    }
}

use rootwalk_domain::ResolutionResult;

/// Per-name result cache.
///
/// Keyed by the queried name only: an A lookup and a TXT lookup of the same
/// name share one entry.
pub trait ResolutionCache: Send + Sync {
    /// Returns the stored result only while it is fresh.
    fn get(&self, name: &str) -> Option<ResolutionResult>;

    /// Replaces any existing entry and restarts its time-to-live.
    fn put(&self, name: &str, result: ResolutionResult);
}

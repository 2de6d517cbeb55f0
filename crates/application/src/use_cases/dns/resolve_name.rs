use super::referral_walk::{ReferralWalker, WalkOutcome};
use crate::ports::{NameServerClient, ResolutionCache};
use rootwalk_domain::{DomainError, RecordType, ResolutionResult, ResolverConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Placeholder returned when a walk fails. Never cached.
pub const NO_RECORD_FOUND: &str = "No record found";

/// Cached, referral-walking resolution from the root servers.
///
/// The cache is consulted by name alone, so whatever was stored for a name
/// is served for every record type until it expires.
pub struct ResolveNameUseCase {
    walker: ReferralWalker,
    cache: Arc<dyn ResolutionCache>,
    root_servers: Vec<String>,
    resolution_timeout: Option<Duration>,
}

impl ResolveNameUseCase {
    pub fn new(
        client: Arc<dyn NameServerClient>,
        cache: Arc<dyn ResolutionCache>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            walker: ReferralWalker::new(client, config.max_referral_depth),
            cache,
            root_servers: config.root_servers.clone(),
            resolution_timeout: config.resolution_timeout(),
        }
    }

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> ResolutionResult {
        if let Some(cached) = self.cache.get(domain) {
            debug!(domain = %domain, record_type = %record_type, "Cache hit");
            return cached;
        }

        match self.walk(domain, record_type).await {
            Ok(outcome) => {
                let lines = outcome.answer_lines();
                self.cache.put(domain, lines.clone());
                lines
            }
            Err(e) => {
                warn!(domain = %domain, record_type = %record_type, error = %e, "Error resolving name");
                vec![NO_RECORD_FOUND.to_string()]
            }
        }
    }

    /// Uncached walk from the root servers.
    pub async fn walk(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<WalkOutcome, DomainError> {
        let walk = self.walker.walk(domain, record_type, &self.root_servers);

        match self.resolution_timeout {
            Some(budget) => tokio::time::timeout(budget, walk)
                .await
                .map_err(|_| DomainError::ResolutionTimeout(domain.to_string()))?,
            None => walk.await,
        }
    }
}

use super::resolve_name::ResolveNameUseCase;
use super::strategies::RecordStrategies;
use rootwalk_domain::{RecordType, ResolutionResult};
use std::sync::Arc;

/// Routes a record type to the lookup that serves it.
///
/// By default A goes through the cached referral walk and every other type
/// through its dedicated strategy. With `walk_all` every type takes the
/// referral walk.
pub struct LookupRecordsUseCase {
    resolver: Arc<ResolveNameUseCase>,
    strategies: RecordStrategies,
    walk_all: bool,
}

impl LookupRecordsUseCase {
    pub fn new(resolver: Arc<ResolveNameUseCase>, strategies: RecordStrategies) -> Self {
        Self {
            resolver,
            strategies,
            walk_all: false,
        }
    }

    pub fn with_walk_all(mut self, walk_all: bool) -> Self {
        self.walk_all = walk_all;
        self
    }

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> ResolutionResult {
        if self.walk_all {
            return self.resolver.execute(domain, record_type).await;
        }

        match record_type {
            RecordType::A => self.resolver.execute(domain, record_type).await,
            RecordType::NS => self.strategies.ns_with_glue(domain).await,
            RecordType::CNAME => self.strategies.chase_cname(domain).await,
            RecordType::TXT => self.strategies.txt_with_random(domain).await,
            RecordType::AAAA => self.strategies.first_ipv6(domain).await,
        }
    }
}

/// Output lines for one name: the results, or a single not-found line.
pub fn render_lines(domain: &str, results: &[String]) -> Vec<String> {
    if results.is_empty() {
        vec![format!("{}, No record found", domain)]
    } else {
        results.to_vec()
    }
}

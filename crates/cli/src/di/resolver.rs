use anyhow::anyhow;
use rootwalk_application::ports::NameServerClient;
use rootwalk_application::use_cases::{
    DirectQuery, LookupRecordsUseCase, RecordStrategies, ResolveNameUseCase,
};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{RecordCache, UdpNameServerClient};
use std::sync::Arc;
use tracing::info;

pub struct ResolverServices {
    pub lookup: Arc<LookupRecordsUseCase>,
    pub cache: Arc<RecordCache>,
}

impl ResolverServices {
    pub fn new(config: &Config, walk_all: bool) -> anyhow::Result<Self> {
        let client: Arc<dyn NameServerClient> =
            Arc::new(UdpNameServerClient::new(config.resolver.query_timeout()));
        Self::with_client(config, client, walk_all)
    }

    pub fn with_client(
        config: &Config,
        client: Arc<dyn NameServerClient>,
        walk_all: bool,
    ) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;

        let direct_server = resolver_config
            .direct_server()
            .ok_or_else(|| anyhow!("No server available for direct lookups"))?;

        info!(
            root_servers = ?resolver_config.root_servers,
            direct_server = %direct_server,
            query_timeout_ms = resolver_config.query_timeout_ms,
            cache_ttl_secs = resolver_config.cache_ttl_secs,
            max_referral_depth = resolver_config.max_referral_depth,
            walk_all = walk_all,
            "Resolver configured"
        );

        let cache = Arc::new(RecordCache::new(resolver_config.cache_ttl()));
        let resolver = Arc::new(ResolveNameUseCase::new(
            client.clone(),
            cache.clone(),
            resolver_config,
        ));
        let strategies = RecordStrategies::new(DirectQuery::new(client, direct_server));

        let lookup = Arc::new(LookupRecordsUseCase::new(resolver, strategies).with_walk_all(walk_all));

        Ok(Self { lookup, cache })
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// a.root-servers.net, b.root-servers.net, c.root-servers.net
pub const ROOT_HINTS: [&str; 3] = ["198.41.0.4", "199.9.14.201", "192.33.4.12"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Starting server set for every referral walk, tried in order.
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Server used by the single-shot lookups behind the per-type
    /// strategies. Falls back to the first root server.
    #[serde(default)]
    pub direct_server: Option<String>,

    /// Read deadline for one datagram exchange.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: u8,

    /// Budget for one whole walk. Unset means only the per-read deadline applies.
    #[serde(default)]
    pub resolution_timeout_ms: Option<u64>,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn resolution_timeout(&self) -> Option<Duration> {
        self.resolution_timeout_ms.map(Duration::from_millis)
    }

    pub fn direct_server(&self) -> Option<&str> {
        self.direct_server
            .as_deref()
            .or_else(|| self.root_servers.first().map(String::as_str))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            direct_server: None,
            query_timeout_ms: default_query_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_referral_depth: default_max_referral_depth(),
            resolution_timeout_ms: None,
        }
    }
}

fn default_root_servers() -> Vec<String> {
    ROOT_HINTS.iter().map(|s| s.to_string()).collect()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_max_referral_depth() -> u8 {
    20
}

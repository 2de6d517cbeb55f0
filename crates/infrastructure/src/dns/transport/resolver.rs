use super::DNS_PORT;
use rootwalk_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Turns a server entry into a socket address.
///
/// Accepts `ip:port`, a bare IP (port 53), or a host name, which is looked
/// up with the system resolver and the first address wins. Referral
/// targets arrive as host names and are dialled this way. The host lookup
/// gets `lookup_timeout`, the same deadline as the exchange itself.
pub async fn resolve_server(
    server: &str,
    lookup_timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }

    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }

    let mut addrs = bounded_lookup(
        server,
        lookup_timeout,
        tokio::net::lookup_host((server, DNS_PORT)),
    )
    .await?;

    addrs.next().ok_or_else(|| DomainError::TransportConnect {
        server: server.to_string(),
        reason: "host name has no addresses".to_string(),
    })
}

async fn bounded_lookup<F, I>(
    server: &str,
    lookup_timeout: Duration,
    lookup: F,
) -> Result<I, DomainError>
where
    F: Future<Output = io::Result<I>>,
{
    tokio::time::timeout(lookup_timeout, lookup)
        .await
        .map_err(|_| DomainError::TransportConnect {
            server: server.to_string(),
            reason: "host lookup timed out".to_string(),
        })?
        .map_err(|e| DomainError::TransportConnect {
            server: server.to_string(),
            reason: format!("host lookup failed: {}", e),
        })
}

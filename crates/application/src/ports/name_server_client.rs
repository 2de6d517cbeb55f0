use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError, RawResponse};

#[async_trait]
pub trait NameServerClient: Send + Sync {
    /// Exactly one query/response exchange with `server` (an IP literal or
    /// a host name, port 53 implied). No retries.
    ///
    /// Failures tied to `server` are transport kinds of `DomainError`
    /// (see [`DomainError::is_transport`]). A query that cannot be encoded
    /// fails with `InvalidDomainName` before anything is sent, and would
    /// fail the same way for every server.
    async fn query(&self, query: &DnsQuery, server: &str) -> Result<RawResponse, DomainError>;
}

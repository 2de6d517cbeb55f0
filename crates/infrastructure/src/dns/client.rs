use super::codec::HickoryCodec;
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use rootwalk_application::ports::{DnsCodec, NameServerClient};
use rootwalk_domain::{DnsQuery, DomainError, RawResponse};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// `NameServerClient` that encodes with a codec and exchanges datagrams
/// over a transport.
pub struct UdpNameServerClient {
    codec: Arc<dyn DnsCodec>,
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl UdpNameServerClient {
    /// Hickory codec over UDP.
    pub fn new(timeout: Duration) -> Self {
        Self::with_parts(
            Arc::new(HickoryCodec::new()),
            Arc::new(UdpTransport::new()),
            timeout,
        )
    }

    pub fn with_parts(
        codec: Arc<dyn DnsCodec>,
        transport: Arc<dyn DnsTransport>,
        timeout: Duration,
    ) -> Self {
        Self {
            codec,
            transport,
            timeout,
        }
    }
}

#[async_trait]
impl NameServerClient for UdpNameServerClient {
    async fn query(&self, query: &DnsQuery, server: &str) -> Result<RawResponse, DomainError> {
        let message = self.codec.encode_question(query)?;

        let response = self
            .transport
            .send(&message, server, self.timeout)
            .await?;

        let decoded = self.codec.decode_message(&response.bytes).map_err(|e| {
            DomainError::InvalidDnsResponse {
                server: response.server_addr.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            recursion_desired = query.recursion_desired,
            server = %response.server_addr,
            protocol = self.transport.protocol_name(),
            "Exchange complete"
        );

        Ok(decoded)
    }
}

pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

/// Well-known DNS port, used when a server entry carries none.
pub const DNS_PORT: u16 = 53;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// Socket address the server entry resolved to.
    pub server_addr: SocketAddr,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// One request/response exchange with `server`. `timeout` bounds the
    /// wait for the reply.
    async fn send(
        &self,
        message_bytes: &[u8],
        server: &str,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back, on a fresh connected socket per
//! exchange. Messages are sent as-is (no framing) and truncated replies are
//! returned unchanged.

use super::resolver::resolve_server;
use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Receive buffer size. Replies longer than this are cut off and will
/// normally fail to decode.
const MAX_UDP_RESPONSE_SIZE: usize = 1024;

#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    async fn connect(
        server: &str,
        timeout: Duration,
    ) -> Result<(UdpSocket, SocketAddr), DomainError> {
        let server_addr = resolve_server(server, timeout).await?;

        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let connect_err = |e: std::io::Error| DomainError::TransportConnect {
            server: server_addr.to_string(),
            reason: e.to_string(),
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(connect_err)?;
        socket.connect(server_addr).await.map_err(connect_err)?;

        Ok((socket, server_addr))
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: &str,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let (socket, server_addr) = Self::connect(server, timeout).await?;

        let bytes_sent =
            socket
                .send(message_bytes)
                .await
                .map_err(|e| DomainError::TransportSend {
                    server: server_addr.to_string(),
                    reason: e.to_string(),
                })?;

        debug!(server = %server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| DomainError::TransportReceive {
                server: server_addr.to_string(),
                reason: e.to_string(),
            })?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            server_addr,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

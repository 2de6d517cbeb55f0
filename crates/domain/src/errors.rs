use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidDnsResponse { server: String, reason: String },

    #[error("Failed to connect to server {server}: {reason}")]
    TransportConnect { server: String, reason: String },

    #[error("Failed to send query to server {server}: {reason}")]
    TransportSend { server: String, reason: String },

    #[error("Failed to read from server {server}: {reason}")]
    TransportReceive { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Resolution failed for {0}")]
    ResolutionFailed(String),

    #[error("Referral chain for {domain} exceeded {limit} hops")]
    ReferralLimitExceeded { domain: String, limit: u8 },

    #[error("Resolution of {0} exceeded its time budget")]
    ResolutionTimeout(String),
}

impl DomainError {
    /// Errors raised while talking to a single server. The referral walk
    /// moves on to the next candidate when it sees one of these.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::TransportConnect { .. }
                | Self::TransportSend { .. }
                | Self::TransportReceive { .. }
                | Self::TransportTimeout { .. }
                | Self::InvalidDnsResponse { .. }
        )
    }
}

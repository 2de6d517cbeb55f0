use rootwalk_domain::{DnsQuery, DomainError, RawResponse};

/// Wire format collaborator. The engine never builds or parses bytes itself.
pub trait DnsCodec: Send + Sync {
    /// Encodes a single-question message for `query`, honouring its RD flag.
    fn encode_question(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError>;

    /// Decodes a reply. Fails with `DomainError::MalformedMessage`.
    fn decode_message(&self, bytes: &[u8]) -> Result<RawResponse, DomainError>;
}

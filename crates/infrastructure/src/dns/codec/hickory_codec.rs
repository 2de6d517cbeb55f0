use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use rootwalk_application::ports::DnsCodec;
use rootwalk_domain::{DnsQuery, DomainError, RawResponse};

/// `DnsCodec` backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DnsCodec for HickoryCodec {
    fn encode_question(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(query)
    }

    fn decode_message(&self, bytes: &[u8]) -> Result<RawResponse, DomainError> {
        ResponseParser::parse(bytes)
    }
}

use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DomainError, RawResponse, ResourceRecord};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a reply into the fields the referral walk looks at.
    ///
    /// Answers keep their order and type, including types outside the
    /// resolver's own set. Only NS records of the authority section become
    /// referrals; SOA and friends are dropped.
    pub fn parse(response_bytes: &[u8]) -> Result<RawResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<ResourceRecord> = message.answers().iter().map(to_resource_record).collect();

        let referrals: Vec<String> = message
            .name_servers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(ns.0.to_utf8()),
                _ => None,
            })
            .collect();

        let authoritative = message.header().authoritative();
        let response_code = u16::from(message.response_code());

        debug!(
            rcode = response_code,
            authoritative = authoritative,
            answers = answers.len(),
            referrals = referrals.len(),
            "Parsed DNS response"
        );

        Ok(RawResponse {
            answers,
            referrals,
            authoritative,
            response_code,
        })
    }
}

fn to_resource_record(record: &Record) -> ResourceRecord {
    ResourceRecord::new(
        record.name().to_utf8(),
        record.ttl(),
        record.record_type().to_string(),
        record.data().to_string(),
    )
}

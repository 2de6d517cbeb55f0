//! DNS Message Builder
//!
//! Constructs single-question query messages in wire format using
//! `hickory-proto`. The RD flag follows the query: off while walking
//! referrals, on for direct lookups.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DnsQuery, DomainError};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and serialize it to wire format bytes
    ///
    /// The name is made fully qualified first, and the message gets a
    /// random ID.
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let fqdn = query.fqdn();
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(serialization_error)?;

        Ok(buf)
    }
}

fn serialization_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::MalformedMessage(format!("Failed to serialize DNS message: {}", e))
}

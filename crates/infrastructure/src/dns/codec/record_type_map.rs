//! Mapping between `rootwalk_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use rootwalk_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }
}

use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    /// RD flag. Off for referral walking, on for direct lookups.
    pub recursion_desired: bool,
}

impl DnsQuery {
    /// Query for the referral walk: the server must not chase the answer.
    pub fn iterative(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            recursion_desired: false,
        }
    }

    pub fn recursive(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            recursion_desired: true,
        }
    }

    /// Domain with a trailing dot, as it goes on the wire.
    pub fn fqdn(&self) -> String {
        if self.domain.ends_with('.') {
            self.domain.to_string()
        } else {
            format!("{}.", self.domain)
        }
    }
}

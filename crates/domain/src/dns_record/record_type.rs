use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record types the resolver knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    TXT,
    AAAA,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::AAAA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
        }
    }

    /// Comma separated list of accepted tokens, for usage messages.
    pub fn known_tokens() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tokens are matched exactly: `"A"` parses, `"a"` does not.
impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            _ => Err(DomainError::InvalidRecordType(s.to_string())),
        }
    }
}

use super::ResourceRecord;

/// Decoded reply from a name server. Only the codec builds these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub answers: Vec<ResourceRecord>,
    /// Name server host names taken from the authority section's NS records.
    pub referrals: Vec<String>,
    pub authoritative: bool,
    pub response_code: u16,
}

impl RawResponse {
    pub fn is_authoritative_answer(&self) -> bool {
        self.authoritative && !self.answers.is_empty()
    }

    /// Record data of each answer, in the order received.
    pub fn answer_data(&self) -> Vec<String> {
        self.answers.iter().map(|rr| rr.data.clone()).collect()
    }
}

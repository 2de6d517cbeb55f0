use crate::ports::NameServerClient;
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Single recursion-desired query to one fixed server.
///
/// Backs the per-type strategies, which skip the referral walk and the
/// cache on purpose.
pub struct DirectQuery {
    client: Arc<dyn NameServerClient>,
    server: String,
}

impl DirectQuery {
    pub fn new(client: Arc<dyn NameServerClient>, server: impl Into<String>) -> Self {
        Self {
            client,
            server: server.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Record data of every answer, in the order received.
    pub async fn answers(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let query = DnsQuery::recursive(domain, record_type);
        let response = self.client.query(&query, &self.server).await?;

        debug!(
            domain = %domain,
            record_type = %record_type,
            server = %self.server,
            answers = response.answers.len(),
            "Direct query answered"
        );

        Ok(response.answer_data())
    }
}

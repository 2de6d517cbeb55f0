use super::direct_query::DirectQuery;
use rootwalk_domain::{RecordType, ResolutionResult};
use std::net::IpAddr;
use tracing::debug;

/// Per-record-type lookups built on [`DirectQuery`].
pub struct RecordStrategies {
    direct: DirectQuery,
}

impl RecordStrategies {
    pub fn new(direct: DirectQuery) -> Self {
        Self { direct }
    }

    /// Pairs every CNAME target of `domain` with its first A record.
    /// Targets are reported without the trailing root dot.
    pub async fn chase_cname(&self, domain: &str) -> ResolutionResult {
        let targets = match self.direct.answers(domain, RecordType::CNAME).await {
            Ok(targets) if !targets.is_empty() => targets,
            _ => return vec![format!("{} is not a CNAME", domain)],
        };

        let mut results = Vec::with_capacity(targets.len());
        for target in targets {
            let target = target.trim_end_matches('.');
            match self.first_answer(target, RecordType::A).await {
                Some(address) => results.push(format!("{},{}", target, address)),
                None => results.push(format!("{} has no A records", target)),
            }
        }
        results
    }

    /// First NS of `domain`, with its first A record when one resolves.
    /// Further NS records are ignored.
    pub async fn ns_with_glue(&self, domain: &str) -> ResolutionResult {
        let Some(ns) = self.first_answer(domain, RecordType::NS).await else {
            return Vec::new();
        };
        let ns = ns.trim_end_matches('.').to_string();

        match self.first_answer(&ns, RecordType::A).await {
            Some(address) => vec![format!("{},{}", ns, address)],
            None => vec![ns],
        }
    }

    /// First answer that is a genuine IPv6 address. IPv4 literals,
    /// IPv4-mapped addresses and garbage are skipped.
    pub async fn first_ipv6(&self, domain: &str) -> ResolutionResult {
        let answers = self
            .direct
            .answers(domain, RecordType::AAAA)
            .await
            .unwrap_or_default();

        first_genuine_ipv6(&answers)
            .map(|ip| vec![ip.to_string()])
            .unwrap_or_default()
    }

    /// TXT records of `domain`, each suffixed with the same random number
    /// in `0..100`.
    pub async fn txt_with_random(&self, domain: &str) -> ResolutionResult {
        let records = match self.direct.answers(domain, RecordType::TXT).await {
            Ok(records) if !records.is_empty() => records,
            _ => return vec!["No TXT record found".to_string()],
        };

        let random = fastrand::u32(0..100);
        records
            .into_iter()
            .map(|txt| format!("{} Random number: {}", txt, random))
            .collect()
    }

    async fn first_answer(&self, domain: &str, record_type: RecordType) -> Option<String> {
        match self.direct.answers(domain, record_type).await {
            Ok(answers) => answers.into_iter().next(),
            Err(e) => {
                debug!(domain = %domain, record_type = %record_type, error = %e, "Follow-up lookup failed");
                None
            }
        }
    }
}

fn first_genuine_ipv6(answers: &[String]) -> Option<IpAddr> {
    answers
        .iter()
        .filter_map(|answer| answer.trim_end_matches('.').parse::<IpAddr>().ok())
        .find(|ip| match ip {
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_none(),
            IpAddr::V4(_) => false,
        })
}

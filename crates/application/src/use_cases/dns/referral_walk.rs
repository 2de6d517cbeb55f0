use crate::ports::NameServerClient;
use rootwalk_domain::{DnsQuery, DomainError, RawResponse, RecordType, ResourceRecord};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// How a referral walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// A server flagged as authoritative returned answers.
    Authoritative {
        server: String,
        records: Vec<ResourceRecord>,
    },
    /// Nothing authoritative and no usable referral at the last level; the
    /// answers of the last response seen there are returned as they are.
    BestEffort {
        server: String,
        records: Vec<ResourceRecord>,
    },
}

impl WalkOutcome {
    pub fn records(&self) -> &[ResourceRecord] {
        match self {
            Self::Authoritative { records, .. } | Self::BestEffort { records, .. } => records,
        }
    }

    pub fn server(&self) -> &str {
        match self {
            Self::Authoritative { server, .. } | Self::BestEffort { server, .. } => server,
        }
    }

    pub fn is_best_effort(&self) -> bool {
        matches!(self, Self::BestEffort { .. })
    }

    pub fn answer_lines(&self) -> Vec<String> {
        self.records().iter().map(|rr| rr.to_string()).collect()
    }
}

enum LevelOutcome {
    Answer(WalkOutcome),
    Referral(Vec<String>),
    Exhausted(Option<(String, RawResponse)>),
    Failed(DomainError),
}

struct WalkState {
    depth: u8,
    visited: HashSet<String>,
}

impl WalkState {
    fn new() -> Self {
        Self {
            depth: 0,
            visited: HashSet::new(),
        }
    }

    /// Returns false when `server` was already contacted during this walk.
    fn visit(&mut self, server: &str) -> bool {
        self.visited.insert(server.to_string())
    }

    fn is_visited(&self, server: &str) -> bool {
        self.visited.contains(server)
    }
}

/// Follows referrals from a starting server set down to an answer.
///
/// Each level tries its candidates in order, one at a time. A level ends on
/// the first authoritative answer, on the first usable referral, or when the
/// candidates run out. Only transport failures move on to the next
/// candidate; any other error ends the walk. Depth is capped at `max_depth`
/// referral hops and no server is contacted twice within one walk.
pub struct ReferralWalker {
    client: Arc<dyn NameServerClient>,
    max_depth: u8,
}

impl ReferralWalker {
    pub fn new(client: Arc<dyn NameServerClient>, max_depth: u8) -> Self {
        Self { client, max_depth }
    }

    pub async fn walk(
        &self,
        domain: &str,
        record_type: RecordType,
        servers: &[String],
    ) -> Result<WalkOutcome, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::ResolutionFailed(domain.to_string()));
        }

        let query = DnsQuery::iterative(domain, record_type);
        let mut state = WalkState::new();
        let mut candidates = servers.to_vec();

        loop {
            match self.query_level(&query, &candidates, &mut state).await {
                LevelOutcome::Answer(outcome) => {
                    debug!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        server = outcome.server(),
                        depth = state.depth,
                        "Authoritative answer"
                    );
                    return Ok(outcome);
                }
                LevelOutcome::Referral(next) => {
                    if state.depth >= self.max_depth {
                        warn!(
                            domain = %query.domain,
                            limit = self.max_depth,
                            "Referral hop limit reached"
                        );
                        return Err(DomainError::ReferralLimitExceeded {
                            domain: domain.to_string(),
                            limit: self.max_depth,
                        });
                    }
                    state.depth += 1;
                    debug!(
                        domain = %query.domain,
                        depth = state.depth,
                        servers = ?next,
                        "Following referral"
                    );
                    candidates = next;
                }
                LevelOutcome::Exhausted(last) => return best_effort_fallback(&query, last),
                LevelOutcome::Failed(e) => {
                    warn!(domain = %query.domain, error = %e, "Query cannot be sent to any server");
                    return Err(e);
                }
            }
        }
    }

    async fn query_level(
        &self,
        query: &DnsQuery,
        candidates: &[String],
        state: &mut WalkState,
    ) -> LevelOutcome {
        let mut last_response: Option<(String, RawResponse)> = None;

        for server in candidates {
            if !state.visit(server) {
                debug!(server = %server, "Skipping server already contacted in this walk");
                continue;
            }

            let response = match self.client.query(query, server).await {
                Ok(response) => response,
                Err(e) if e.is_transport() => {
                    debug!(server = %server, error = %e, "Server failed, trying next candidate");
                    continue;
                }
                Err(e) => return LevelOutcome::Failed(e),
            };

            if response.is_authoritative_answer() {
                return LevelOutcome::Answer(WalkOutcome::Authoritative {
                    server: server.clone(),
                    records: response.answers,
                });
            }

            let next: Vec<String> = response
                .referrals
                .iter()
                .filter(|ns| !state.is_visited(ns))
                .cloned()
                .collect();

            last_response = Some((server.clone(), response));

            if !next.is_empty() {
                return LevelOutcome::Referral(next);
            }
        }

        LevelOutcome::Exhausted(last_response)
    }
}

/// Turns the last response of an exhausted level into a lenient success.
/// With no response at all the walk has failed.
pub fn best_effort_fallback(
    query: &DnsQuery,
    last_response: Option<(String, RawResponse)>,
) -> Result<WalkOutcome, DomainError> {
    match last_response {
        Some((server, response)) => {
            debug!(
                domain = %query.domain,
                server = %server,
                answers = response.answers.len(),
                "No authoritative answer or referral, using last response"
            );
            Ok(WalkOutcome::BestEffort {
                server,
                records: response.answers,
            })
        }
        None => Err(DomainError::ResolutionFailed(query.domain.to_string())),
    }
}

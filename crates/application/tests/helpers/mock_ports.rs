#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{NameServerClient, ResolutionCache};
use rootwalk_domain::{
    DnsQuery, DomainError, RawResponse, RecordType, ResolutionResult, ResourceRecord,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type ResponseKey = (String, String, RecordType);

fn key(server: &str, domain: &str, record_type: RecordType) -> ResponseKey {
    (
        server.to_string(),
        domain.trim_end_matches('.').to_string(),
        record_type,
    )
}

/// Scripted name server client. Unscripted exchanges time out.
#[derive(Clone, Default)]
pub struct MockNameServerClient {
    responses: Arc<RwLock<HashMap<ResponseKey, Result<RawResponse, DomainError>>>>,
    calls: Arc<RwLock<Vec<(String, DnsQuery)>>>,
}

impl MockNameServerClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
        response: RawResponse,
    ) {
        self.responses
            .write()
            .unwrap()
            .insert(key(server, domain, record_type), Ok(response));
    }

    pub fn set_error(&self, server: &str, domain: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(key(server, domain, record_type), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, DnsQuery)> {
        self.calls.read().unwrap().clone()
    }

    pub fn servers_contacted(&self) -> Vec<String> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .map(|(server, _)| server.clone())
            .collect()
    }
}

#[async_trait]
impl NameServerClient for MockNameServerClient {
    async fn query(&self, query: &DnsQuery, server: &str) -> Result<RawResponse, DomainError> {
        self.calls
            .write()
            .unwrap()
            .push((server.to_string(), query.clone()));

        self.responses
            .read()
            .unwrap()
            .get(&key(server, &query.domain, query.record_type))
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::TransportTimeout {
                    server: format!("{}:53", server),
                })
            })
    }
}

/// Cache double whose entries stay fresh until `expire_all` is called.
#[derive(Default)]
pub struct MockResolutionCache {
    entries: RwLock<HashMap<String, (ResolutionResult, bool)>>,
    puts: RwLock<usize>,
}

impl MockResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expire_all(&self) {
        for entry in self.entries.write().unwrap().values_mut() {
            entry.1 = false;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.puts.read().unwrap()
    }

    pub fn raw(&self, name: &str) -> Option<ResolutionResult> {
        self.entries
            .read()
            .unwrap()
            .get(name)
            .map(|(result, _)| result.clone())
    }
}

impl ResolutionCache for MockResolutionCache {
    fn get(&self, name: &str) -> Option<ResolutionResult> {
        self.entries
            .read()
            .unwrap()
            .get(name)
            .filter(|(_, fresh)| *fresh)
            .map(|(result, _)| result.clone())
    }

    fn put(&self, name: &str, result: ResolutionResult) {
        self.entries
            .write()
            .unwrap()
            .insert(name.to_string(), (result, true));
        *self.puts.write().unwrap() += 1;
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn records(name: &str, type_label: &str, data: &[&str]) -> Vec<ResourceRecord> {
    data.iter()
        .map(|d| ResourceRecord::new(format!("{}.", name.trim_end_matches('.')), 300, type_label, *d))
        .collect()
}

pub fn authoritative_answer(name: &str, type_label: &str, data: &[&str]) -> RawResponse {
    RawResponse {
        answers: records(name, type_label, data),
        authoritative: true,
        ..Default::default()
    }
}

pub fn non_authoritative_answer(name: &str, type_label: &str, data: &[&str]) -> RawResponse {
    RawResponse {
        answers: records(name, type_label, data),
        authoritative: false,
        ..Default::default()
    }
}

pub fn referral(name_servers: &[&str]) -> RawResponse {
    RawResponse {
        referrals: strings(name_servers),
        ..Default::default()
    }
}

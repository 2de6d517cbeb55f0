//! rootwalk domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig, ROOT_HINTS};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use dns_response::RawResponse;
pub use errors::DomainError;

/// Human-readable result lines for one lookup, in the order received.
pub type ResolutionResult = Vec<String>;

mod dns_codec;
mod name_server_client;
mod resolution_cache;

pub use dns_codec::DnsCodec;
pub use name_server_client::NameServerClient;
pub use resolution_cache::ResolutionCache;

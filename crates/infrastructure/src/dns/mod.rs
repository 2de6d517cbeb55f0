pub mod cache;
pub mod client;
pub mod codec;
pub mod transport;

pub use cache::RecordCache;
pub use client::UdpNameServerClient;
pub use codec::HickoryCodec;
pub use transport::{DnsTransport, UdpTransport};

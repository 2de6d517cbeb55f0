//! rootwalk infrastructure: wire codec, UDP transport and the record cache.
pub mod dns;

//! rootwalk application layer: ports and the resolution engine.
pub mod ports;
pub mod use_cases;

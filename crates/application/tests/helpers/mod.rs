#![allow(dead_code)]
mod mock_ports;

pub use mock_ports::{
    authoritative_answer, non_authoritative_answer, referral, strings, MockNameServerClient,
    MockResolutionCache,
};

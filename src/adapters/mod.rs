//! Adapters layer
//!
//! Inbound adapters translating external requests into use case calls.

pub mod http;

//! Application layer
//!
//! Use cases that orchestrate the domain service to implement the account
//! workflows exposed over HTTP.

pub mod user;

//! User account backend
//!
//! Layers, outermost first:
//! - `adapters`: HTTP controller (actix-web)
//! - `application`: use cases
//! - `domain`: the `User` document, value objects, business rules and ports
//! - `infrastructure`: configuration, record stores and password hashing

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

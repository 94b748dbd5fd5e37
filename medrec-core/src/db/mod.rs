//! Database layer - connection provider, data access functions, repositories
//!
//! - One pooled connection per operation, released on every exit path
//! - Writes commit immediately; no multi-statement transactions
//! - Rely on DB constraints and report violations as integrity errors

pub mod access;
pub mod migrations;
pub mod provider;
pub mod repos;

pub use access::Database;
pub use provider::ConnectionProvider;
pub use repos::*;

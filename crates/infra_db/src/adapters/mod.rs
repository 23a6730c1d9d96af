//! Domain Adapters
//!
//! Implementations of domain ports backed by PostgreSQL.
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain records and database rows
//! - Maps `DatabaseError` into `PortError`

pub mod quote;

pub use quote::PostgresQuoteStore;

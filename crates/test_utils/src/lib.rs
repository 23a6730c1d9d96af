//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built quote requests, dates and reference figures
//! - `builders`: Builder patterns for quote requests and records
//! - `database`: PostgreSQL test container management
//! - `assertions`: Assertion helpers for money and premium breakdowns
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;

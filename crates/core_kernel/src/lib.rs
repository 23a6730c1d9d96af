//! Core Kernel - Foundational types shared by the quoting crates
//!
//! - Money and rate types with exact decimal arithmetic
//! - Record and quote identifiers
//! - A clock abstraction for date-dependent rules
//! - Port error and health types for store adapters

pub mod money;
pub mod identifiers;
pub mod clock;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{QuoteRecordId, QuoteId, QuoteIdError};
pub use clock::{Clock, SystemClock, FixedClock};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};

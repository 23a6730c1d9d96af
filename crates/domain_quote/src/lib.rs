//! Quote Rating Domain
//!
//! This crate prices property insurance quotes: it stores an applicant's
//! answers under a public quote number and derives the monthly and term
//! premium from a base fee, a rate table and a handful of risk factors.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic:
//! - **Records**: `NewQuote` (applicant request), `QuoteRecord` (stored quote)
//! - **Rating**: `RatingEngine` over an immutable `RateTable`
//! - **Ports**: `QuoteStore`, implemented in memory here and by `infra_db`
//! - **Services**: `QuoteService` orchestrates validation, allocation and checkout
//!
//! # Premium Derivation
//!
//! ```text
//! monthly fees      = volcanic state fee + cancellation fee
//! monthly discounts = loyalty discount + property owner discount
//! monthly premium   = base fee + monthly fees + monthly discounts
//! term premium      = monthly premium x policy term
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{QuoteService, InMemoryQuoteStore};
//!
//! let service = QuoteService::new(Arc::new(InMemoryQuoteStore::new()));
//! let quote = service.create_quote(request).await?;
//! let checkout = service.checkout(quote.quote_id.as_str()).await?;
//! println!("{}", checkout.breakdown.rounded().total_term_premium);
//! ```

pub mod error;
pub mod ports;
pub mod quote;
pub mod quote_id;
pub mod rate_table;
pub mod rating;
pub mod services;
pub mod state;
pub mod validation;

pub use error::{QuoteError, ValidationErrors};
pub use ports::memory::InMemoryQuoteStore;
pub use ports::QuoteStore;
pub use quote::{NewQuote, NewQuoteRecord, QuoteRecord, DEFAULT_BASE_FEE, DEFAULT_POLICY_TERM};
pub use quote_id::{generate_quote_id, QuoteIdAllocator};
pub use rate_table::{RateTable, RateTableError};
pub use rating::{Adjustment, AdjustmentCategory, PremiumBreakdown, RatingEngine};
pub use services::{CheckoutQuote, QuoteService};
pub use state::{StateCode, UnknownStateCode};
pub use validation::{parse_effective_date, parse_property_state, QuoteValidator};

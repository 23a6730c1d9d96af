//! Repository implementations
//!
//! Repositories speak in database rows; adapters convert rows to domain types.

pub mod quote;

pub use quote::{NewQuoteRow, QuoteRepository, QuoteRow};

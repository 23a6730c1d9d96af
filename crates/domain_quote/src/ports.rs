//! Quote Domain Ports
//!
//! The `QuoteStore` trait is everything the quote domain needs from
//! persistence. Two adapters implement it:
//!
//! - **In-memory** ([`memory::InMemoryQuoteStore`]): tests and database-less runs
//! - **PostgreSQL** (`infra_db::PostgresQuoteStore`): production storage
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_quote::ports::QuoteStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn QuoteStore> = Arc::new(InMemoryQuoteStore::new());
//! let quote = store.get_by_quote_id(&quote_id).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, QuoteId, QuoteRecordId};

use crate::quote::{NewQuoteRecord, QuoteRecord};

/// Persistence port for quote records
///
/// Implementations assign `id` and `created_at` on insert and must reject a
/// duplicate `quote_id` with `PortError::Conflict`.
#[async_trait]
pub trait QuoteStore: DomainPort + HealthCheckable {
    /// Stores a new quote and returns the completed record
    async fn insert(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, PortError>;

    /// Retrieves a quote by storage key, or `PortError::NotFound`
    async fn get(&self, id: QuoteRecordId) -> Result<QuoteRecord, PortError>;

    /// Retrieves a quote by public quote number, or `PortError::NotFound`
    async fn get_by_quote_id(&self, quote_id: &QuoteId) -> Result<QuoteRecord, PortError>;

    /// Lists all quotes, oldest first
    async fn list(&self) -> Result<Vec<QuoteRecord>, PortError>;

    /// Deletes a quote, or `PortError::NotFound`
    async fn delete(&self, id: QuoteRecordId) -> Result<(), PortError>;

    /// Returns true if a quote with this number is already stored
    async fn quote_id_exists(&self, quote_id: &QuoteId) -> Result<bool, PortError>;
}

/// In-memory implementation of `QuoteStore`
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use tokio::sync::RwLock;

    /// Quote store backed by a `HashMap` behind an async lock
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryQuoteStore {
        quotes: Arc<RwLock<HashMap<QuoteRecordId, QuoteRecord>>>,
    }

    impl InMemoryQuoteStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records for testing
        pub async fn with_quotes(quotes: Vec<QuoteRecord>) -> Self {
            let store = Self::new();
            {
                let mut guard = store.quotes.write().await;
                for quote in quotes {
                    guard.insert(quote.id, quote);
                }
            }
            store
        }

        pub async fn len(&self) -> usize {
            self.quotes.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.quotes.read().await.is_empty()
        }
    }

    impl DomainPort for InMemoryQuoteStore {}

    #[async_trait]
    impl HealthCheckable for InMemoryQuoteStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "memory-quote-store".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("In-memory store always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl QuoteStore for InMemoryQuoteStore {
        async fn insert(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, PortError> {
            let mut quotes = self.quotes.write().await;
            if quotes.values().any(|q| q.quote_id == quote.quote_id) {
                return Err(PortError::conflict(format!(
                    "quote_id {} already exists",
                    quote.quote_id
                )));
            }

            let record = quote.into_record(QuoteRecordId::new_v7(), Utc::now());
            quotes.insert(record.id, record.clone());
            Ok(record)
        }

        async fn get(&self, id: QuoteRecordId) -> Result<QuoteRecord, PortError> {
            self.quotes
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Quote", id))
        }

        async fn get_by_quote_id(&self, quote_id: &QuoteId) -> Result<QuoteRecord, PortError> {
            self.quotes
                .read()
                .await
                .values()
                .find(|q| &q.quote_id == quote_id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Quote", quote_id))
        }

        async fn list(&self) -> Result<Vec<QuoteRecord>, PortError> {
            let mut quotes: Vec<_> = self.quotes.read().await.values().cloned().collect();
            quotes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            Ok(quotes)
        }

        async fn delete(&self, id: QuoteRecordId) -> Result<(), PortError> {
            self.quotes
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Quote", id))
        }

        async fn quote_id_exists(&self, quote_id: &QuoteId) -> Result<bool, PortError> {
            Ok(self
                .quotes
                .read()
                .await
                .values()
                .any(|q| &q.quote_id == quote_id))
        }
    }
}

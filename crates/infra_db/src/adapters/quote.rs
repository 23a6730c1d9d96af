//! PostgreSQL Quote Adapter
//!
//! Implements the `QuoteStore` port on top of [`QuoteRepository`]. The
//! adapter owns the conversions between `quotes` rows and domain records;
//! a row that no longer parses (unknown state, bad quote number) surfaces as
//! `PortError::Internal` instead of being silently skipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresQuoteStore;
//! use domain_quote::QuoteStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn QuoteStore> = Arc::new(PostgresQuoteStore::new(pool));
//! let quote = store.get_by_quote_id(&quote_id).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, Currency, DomainPort, HealthCheckResult, HealthCheckable, Money, PortError,
    QuoteId, QuoteRecordId,
};
use domain_quote::{NewQuoteRecord, QuoteRecord, QuoteStore, StateCode};

use crate::error::DatabaseError;
use crate::repositories::quote::{NewQuoteRow, QuoteRepository, QuoteRow};

const ADAPTER_ID: &str = "postgres-quote-store";

/// PostgreSQL-backed implementation of `QuoteStore`
///
/// Quote number uniqueness is enforced by the table's UNIQUE constraint, so a
/// concurrent duplicate insert fails with `PortError::Conflict`.
#[derive(Debug, Clone)]
pub struct PostgresQuoteStore {
    repository: QuoteRepository,
}

impl PostgresQuoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: QuoteRepository::new(pool),
        }
    }

    pub fn repository(&self) -> &QuoteRepository {
        &self.repository
    }
}

impl DomainPort for PostgresQuoteStore {}

#[async_trait]
impl HealthCheckable for PostgresQuoteStore {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(()) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {e}"))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl QuoteStore for PostgresQuoteStore {
    #[instrument(skip(self, quote), fields(quote_id = %quote.quote_id))]
    async fn insert(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, PortError> {
        debug!("Inserting quote");
        let row = self.repository.insert(to_row(quote)?).await?;
        Ok(row_to_record(row)?)
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn get(&self, id: QuoteRecordId) -> Result<QuoteRecord, PortError> {
        let row = self.repository.get(*id.as_uuid()).await?;
        Ok(row_to_record(row)?)
    }

    #[instrument(skip(self), fields(quote_id = %quote_id))]
    async fn get_by_quote_id(&self, quote_id: &QuoteId) -> Result<QuoteRecord, PortError> {
        let row = self.repository.get_by_quote_id(quote_id.as_str()).await?;
        Ok(row_to_record(row)?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<QuoteRecord>, PortError> {
        let rows = self.repository.list().await?;
        debug!(count = rows.len(), "Listed quotes");
        rows.into_iter()
            .map(|row| row_to_record(row).map_err(PortError::from))
            .collect()
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn delete(&self, id: QuoteRecordId) -> Result<(), PortError> {
        Ok(self.repository.delete(*id.as_uuid()).await?)
    }

    #[instrument(skip(self), fields(quote_id = %quote_id))]
    async fn quote_id_exists(&self, quote_id: &QuoteId) -> Result<bool, PortError> {
        Ok(self.repository.quote_id_exists(quote_id.as_str()).await?)
    }
}

/// Converts a domain record into insert values with a fresh time-ordered key
fn to_row(quote: NewQuoteRecord) -> Result<NewQuoteRow, DatabaseError> {
    let policy_term = i32::try_from(quote.policy_term)
        .map_err(|_| DatabaseError::invalid_data(format!("policy term {} too large", quote.policy_term)))?;

    Ok(NewQuoteRow {
        id: *QuoteRecordId::new_v7().as_uuid(),
        quote_id: quote.quote_id.as_str().to_string(),
        base_fee: quote.base_fee.amount(),
        currency: quote.base_fee.currency().code().to_string(),
        policy_term,
        effective_date: quote.effective_date,
        prev_policy_cancelled: quote.prev_policy_cancelled,
        owns_insure_property: quote.owns_insure_property,
        property_zip: quote.property_zip,
        property_state: quote.property_state.as_str().to_string(),
    })
}

/// Converts a stored row back into a domain record
fn row_to_record(row: QuoteRow) -> Result<QuoteRecord, DatabaseError> {
    let quote_id = QuoteId::parse(&row.quote_id)
        .map_err(|e| DatabaseError::invalid_data(format!("quote_id {:?}: {e}", row.quote_id)))?;
    let property_state = row
        .property_state
        .trim()
        .parse::<StateCode>()
        .map_err(|e| DatabaseError::invalid_data(format!("property_state: {e}")))?;
    let currency = row
        .currency
        .parse::<Currency>()
        .map_err(|e| DatabaseError::invalid_data(format!("currency: {e}")))?;
    let policy_term = u32::try_from(row.policy_term)
        .map_err(|_| DatabaseError::invalid_data(format!("policy_term {}", row.policy_term)))?;

    Ok(QuoteRecord {
        id: QuoteRecordId::from_uuid(row.id),
        quote_id,
        base_fee: Money::new(row.base_fee, currency),
        policy_term,
        effective_date: row.effective_date,
        prev_policy_cancelled: row.prev_policy_cancelled,
        owns_insure_property: row.owns_insure_property,
        property_zip: row.property_zip,
        property_state,
        created_at: row.created_at,
    })
}

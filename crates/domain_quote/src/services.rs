//! Quote domain services
//!
//! [`QuoteService`] orchestrates validation, quote number allocation,
//! persistence and rating. It holds no mutable state of its own; everything
//! shared lives behind the store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use core_kernel::{Clock, PortError, QuoteId, QuoteRecordId};

use crate::error::QuoteError;
use crate::ports::QuoteStore;
use crate::quote::{NewQuote, NewQuoteRecord, QuoteRecord};
use crate::quote_id::QuoteIdAllocator;
use crate::rate_table::RateTable;
use crate::rating::{PremiumBreakdown, RatingEngine};
use crate::validation::QuoteValidator;

/// A stored quote together with its priced figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutQuote {
    pub record: QuoteRecord,
    /// Exact figures; round with [`PremiumBreakdown::rounded`] for display
    pub breakdown: PremiumBreakdown,
}

/// Service for creating, retrieving and pricing quotes
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    validator: QuoteValidator,
    allocator: QuoteIdAllocator,
    rates: Arc<RateTable>,
}

impl QuoteService {
    /// Creates a service over `store` with the standard rate table and system clock
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self {
            store,
            validator: QuoteValidator::default(),
            allocator: QuoteIdAllocator::default(),
            rates: Arc::new(RateTable::standard().clone()),
        }
    }

    pub fn with_rates(mut self, rates: Arc<RateTable>) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.validator = QuoteValidator::new(clock);
        self
    }

    pub fn with_allocator(mut self, allocator: QuoteIdAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    pub fn store(&self) -> &Arc<dyn QuoteStore> {
        &self.store
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Validates a request, assigns a fresh quote number and stores the quote
    ///
    /// Existence-check collisions and insert conflicts draw from the same
    /// attempt budget of the allocator.
    ///
    /// # Errors
    ///
    /// - `QuoteError::Validation` if the request breaks a rule
    /// - `QuoteError::QuoteIdExhausted` if no free quote number was found
    /// - `QuoteError::Store` on any other store failure
    #[instrument(skip(self, request), fields(state = %request.property_state))]
    pub async fn create_quote(&self, request: NewQuote) -> Result<QuoteRecord, QuoteError> {
        self.validator.validate_request(&request)?;

        let max_attempts = self.allocator.max_attempts();
        for attempt in 1..=max_attempts {
            let Some(quote_id) = self.allocator.allocate_once(self.store.as_ref()).await? else {
                continue;
            };
            let new_record = NewQuoteRecord::from_request(quote_id, request.clone());
            self.validator.validate_record(&new_record)?;

            match self.store.insert(new_record).await {
                Ok(record) => {
                    info!(
                        record_id = %record.id,
                        quote_id = %record.quote_id,
                        "Quote created"
                    );
                    return Ok(record);
                }
                Err(PortError::Conflict { message }) => {
                    warn!(attempt, %message, "Quote id taken at insert");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(QuoteError::QuoteIdExhausted {
            attempts: max_attempts,
        })
    }

    /// Retrieves a quote by storage key
    pub async fn get_quote(&self, id: QuoteRecordId) -> Result<QuoteRecord, QuoteError> {
        self.store.get(id).await.map_err(|e| match e {
            e if e.is_not_found() => QuoteError::not_found(id),
            e => e.into(),
        })
    }

    pub async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, QuoteError> {
        Ok(self.store.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_quote(&self, id: QuoteRecordId) -> Result<(), QuoteError> {
        self.store.delete(id).await.map_err(|e| match e {
            e if e.is_not_found() => QuoteError::not_found(id),
            e => e.into(),
        })?;
        info!(record_id = %id, "Quote deleted");
        Ok(())
    }

    /// Looks up a quote by its public number and prices it
    ///
    /// # Errors
    ///
    /// `QuoteError::UnknownQuote` if `quote_id` is malformed or not stored.
    #[instrument(skip(self))]
    pub async fn checkout(&self, quote_id: &str) -> Result<CheckoutQuote, QuoteError> {
        let parsed = QuoteId::parse(quote_id.trim())
            .map_err(|_| QuoteError::UnknownQuote(quote_id.to_string()))?;

        let record = self.store.get_by_quote_id(&parsed).await.map_err(|e| match e {
            e if e.is_not_found() => QuoteError::UnknownQuote(quote_id.to_string()),
            e => e.into(),
        })?;

        let breakdown = RatingEngine::new(&self.rates).breakdown(&record);
        Ok(CheckoutQuote { record, breakdown })
    }
}

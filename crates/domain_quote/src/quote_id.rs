//! Quote number generation
//!
//! Quote numbers are random ten-character codes. Uniqueness is checked against
//! the store one candidate at a time; the caller owns the bounded attempt loop
//! so existence collisions and insert conflicts share one budget.

use rand::Rng;
use tracing::warn;

use core_kernel::QuoteId;

use crate::error::QuoteError;
use crate::ports::QuoteStore;

/// Default number of draws before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Draws a random quote number from `A-Z0-9`
pub fn generate_quote_id<R: Rng + ?Sized>(rng: &mut R) -> QuoteId {
    let mut indices = [0usize; QuoteId::LENGTH];
    for idx in indices.iter_mut() {
        *idx = rng.gen_range(0..QuoteId::ALPHABET.len());
    }
    QuoteId::from_alphabet_indices(indices)
}

/// Checks quote number candidates against a store within an attempt budget
#[derive(Debug, Clone, Copy)]
pub struct QuoteIdAllocator {
    max_attempts: u32,
}

impl Default for QuoteIdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl QuoteIdAllocator {
    /// `max_attempts` is clamped to at least one
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws one random candidate and checks it against the store
    pub async fn allocate_once(&self, store: &dyn QuoteStore) -> Result<Option<QuoteId>, QuoteError> {
        let candidate = generate_quote_id(&mut rand::thread_rng());
        self.check_candidate(store, candidate).await
    }

    /// Returns `candidate` if the store does not hold it yet
    ///
    /// `Ok(None)` means the candidate collided. Each call is one attempt;
    /// callers stop after [`max_attempts`](Self::max_attempts) and report
    /// `QuoteError::QuoteIdExhausted`.
    ///
    /// # Errors
    ///
    /// `QuoteError::Store` when the existence check fails.
    pub async fn check_candidate(
        &self,
        store: &dyn QuoteStore,
        candidate: QuoteId,
    ) -> Result<Option<QuoteId>, QuoteError> {
        if store.quote_id_exists(&candidate).await? {
            warn!(quote_id = %candidate, "Quote id collision");
            return Ok(None);
        }
        Ok(Some(candidate))
    }
}

//! Test Data Builders
//!
//! Builder patterns for quote requests and stored records. Tests set only
//! the fields they care about; everything else gets a valid default.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use core_kernel::{Money, QuoteId, QuoteRecordId};
use domain_quote::{NewQuote, NewQuoteRecord, QuoteRecord, StateCode};

use crate::fixtures::{DateFixtures, MoneyFixtures, QuoteFixtures};

/// Builder for applicant quote requests
#[derive(Debug, Clone)]
pub struct NewQuoteBuilder {
    effective_date: NaiveDate,
    prev_policy_cancelled: bool,
    owns_insure_property: bool,
    property_zip: String,
    property_state: StateCode,
}

impl Default for NewQuoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewQuoteBuilder {
    pub fn new() -> Self {
        Self {
            effective_date: DateFixtures::next_month(),
            prev_policy_cancelled: false,
            owns_insure_property: false,
            property_zip: QuoteFixtures::zip(),
            property_state: StateCode::AR,
        }
    }

    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = date;
        self
    }

    pub fn with_prev_policy_cancelled(mut self, cancelled: bool) -> Self {
        self.prev_policy_cancelled = cancelled;
        self
    }

    pub fn with_owns_insure_property(mut self, owner: bool) -> Self {
        self.owns_insure_property = owner;
        self
    }

    pub fn with_property_zip(mut self, zip: impl Into<String>) -> Self {
        self.property_zip = zip.into();
        self
    }

    pub fn with_property_state(mut self, state: StateCode) -> Self {
        self.property_state = state;
        self
    }

    pub fn build(self) -> NewQuote {
        NewQuote {
            effective_date: self.effective_date,
            prev_policy_cancelled: self.prev_policy_cancelled,
            owns_insure_property: self.owns_insure_property,
            property_zip: self.property_zip,
            property_state: self.property_state,
        }
    }
}

/// Builder for stored quote records
///
/// Unlike the service, the builder lets tests pick any base fee and term.
#[derive(Debug, Clone)]
pub struct QuoteRecordBuilder {
    id: QuoteRecordId,
    quote_id: QuoteId,
    base_fee: Money,
    policy_term: u32,
    request: NewQuoteBuilder,
    created_at: DateTime<Utc>,
}

impl Default for QuoteRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: QuoteRecordId::new_v7(),
            quote_id: QuoteFixtures::quote_id(),
            base_fee: MoneyFixtures::base_fee(),
            policy_term: domain_quote::DEFAULT_POLICY_TERM,
            request: NewQuoteBuilder::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: QuoteRecordId) -> Self {
        self.id = id;
        self
    }

    pub fn with_quote_id(mut self, quote_id: QuoteId) -> Self {
        self.quote_id = quote_id;
        self
    }

    pub fn with_base_fee(mut self, amount: Decimal) -> Self {
        self.base_fee = Money::usd(amount);
        self
    }

    pub fn with_policy_term(mut self, months: u32) -> Self {
        self.policy_term = months;
        self
    }

    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.request = self.request.with_effective_date(date);
        self
    }

    pub fn with_prev_policy_cancelled(mut self, cancelled: bool) -> Self {
        self.request = self.request.with_prev_policy_cancelled(cancelled);
        self
    }

    pub fn with_owns_insure_property(mut self, owner: bool) -> Self {
        self.request = self.request.with_owns_insure_property(owner);
        self
    }

    pub fn with_property_zip(mut self, zip: impl Into<String>) -> Self {
        self.request = self.request.with_property_zip(zip);
        self
    }

    pub fn with_property_state(mut self, state: StateCode) -> Self {
        self.request = self.request.with_property_state(state);
        self
    }

    /// Builds the pre-insert form of the record
    pub fn build_new(self) -> NewQuoteRecord {
        let mut record = NewQuoteRecord::from_request(self.quote_id, self.request.build());
        record.base_fee = self.base_fee;
        record.policy_term = self.policy_term;
        record
    }

    pub fn build(self) -> QuoteRecord {
        let id = self.id;
        let created_at = self.created_at;
        self.build_new().into_record(id, created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_builder_overrides() {
        let record = QuoteRecordBuilder::new()
            .with_base_fee(dec!(100))
            .with_policy_term(12)
            .with_property_state(StateCode::HI)
            .with_owns_insure_property(true)
            .build();

        assert_eq!(record.base_fee.amount(), dec!(100));
        assert_eq!(record.policy_term, 12);
        assert_eq!(record.property_state, StateCode::HI);
        assert!(record.owns_insure_property);
        assert!(!record.prev_policy_cancelled);
    }

    #[test]
    fn test_request_builder_defaults_are_valid() {
        let request = NewQuoteBuilder::new().build();
        assert!(request.effective_date > DateFixtures::today());
        assert!(!request.property_zip.is_empty());
    }
}

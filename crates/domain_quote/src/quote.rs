//! Quote records
//!
//! A [`QuoteRecord`] is what the store hands back: the applicant's answers plus
//! the identifiers and pricing basis fixed at creation time. Clients only ever
//! supply a [`NewQuote`]; the base fee, policy term and quote number are set by
//! the service.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, QuoteId, QuoteRecordId};

use crate::state::StateCode;

/// Monthly base fee charged before fees and discounts
pub const DEFAULT_BASE_FEE: Decimal = dec!(59.94);

/// Policy term in months
pub const DEFAULT_POLICY_TERM: u32 = 6;

/// Maximum length of a property postal code
pub const PROPERTY_ZIP_MAX_LENGTH: usize = 10;

/// Applicant-supplied quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub prev_policy_cancelled: bool,
    #[serde(default)]
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: StateCode,
}

/// A quote ready to be stored: request plus server-assigned pricing basis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuoteRecord {
    pub quote_id: QuoteId,
    pub base_fee: Money,
    pub policy_term: u32,
    pub effective_date: NaiveDate,
    pub prev_policy_cancelled: bool,
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: StateCode,
}

impl NewQuoteRecord {
    /// Attaches the standard base fee and term to an applicant request
    pub fn from_request(quote_id: QuoteId, request: NewQuote) -> Self {
        Self {
            quote_id,
            base_fee: Money::usd(DEFAULT_BASE_FEE),
            policy_term: DEFAULT_POLICY_TERM,
            effective_date: request.effective_date,
            prev_policy_cancelled: request.prev_policy_cancelled,
            owns_insure_property: request.owns_insure_property,
            property_zip: request.property_zip,
            property_state: request.property_state,
        }
    }

    /// Completes the record with the store-assigned key and timestamp
    pub fn into_record(self, id: QuoteRecordId, created_at: DateTime<Utc>) -> QuoteRecord {
        QuoteRecord {
            id,
            quote_id: self.quote_id,
            base_fee: self.base_fee,
            policy_term: self.policy_term,
            effective_date: self.effective_date,
            prev_policy_cancelled: self.prev_policy_cancelled,
            owns_insure_property: self.owns_insure_property,
            property_zip: self.property_zip,
            property_state: self.property_state,
            created_at,
        }
    }
}

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Storage key
    pub id: QuoteRecordId,
    /// Public quote number used at checkout
    pub quote_id: QuoteId,
    /// Monthly base fee
    pub base_fee: Money,
    /// Term length in months
    pub policy_term: u32,
    pub effective_date: NaiveDate,
    /// Whether the insurer cancelled the applicant's previous policy
    pub prev_policy_cancelled: bool,
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: StateCode,
    pub created_at: DateTime<Utc>,
}

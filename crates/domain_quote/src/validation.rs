//! Quote validation rules
//!
//! Checks that must hold before a quote is stored or rated.
//!
//! # Request Rules
//! - `effective_date` is a `YYYY-MM-DD` date no earlier than today
//! - `property_state` is a recognized jurisdiction code
//! - `property_zip` is non-blank and at most 10 characters
//!
//! # Record Rules
//! - `policy_term` is positive
//! - `base_fee` is not negative

use std::sync::Arc;

use chrono::NaiveDate;

use core_kernel::{Clock, SystemClock};

use crate::error::ValidationErrors;
use crate::quote::{NewQuote, NewQuoteRecord, PROPERTY_ZIP_MAX_LENGTH};
use crate::state::StateCode;

pub const EFFECTIVE_DATE_IN_PAST: &str = "Effective date cannot be in the past";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO calendar date, reporting failures against `effective_date`
pub fn parse_effective_date(raw: &str) -> Result<NaiveDate, ValidationErrors> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ValidationErrors::single(
            "effective_date",
            "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.",
        )
    })
}

/// Parses a jurisdiction code, reporting failures against `property_state`
pub fn parse_property_state(raw: &str) -> Result<StateCode, ValidationErrors> {
    raw.parse::<StateCode>()
        .map_err(|e| ValidationErrors::single("property_state", e.to_string()))
}

/// Validates quote requests and records against the current date
#[derive(Clone)]
pub struct QuoteValidator {
    clock: Arc<dyn Clock>,
}

impl Default for QuoteValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for QuoteValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteValidator")
            .field("today", &self.clock.today())
            .finish()
    }
}

impl QuoteValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates an applicant request, collecting every failure
    pub fn validate_request(&self, request: &NewQuote) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if request.effective_date < self.clock.today() {
            errors.add("effective_date", EFFECTIVE_DATE_IN_PAST);
        }

        Self::check_zip(&request.property_zip, &mut errors);

        errors.into_result()
    }

    /// Validates a fully assembled record before it is stored
    pub fn validate_record(&self, record: &NewQuoteRecord) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if record.policy_term == 0 {
            errors.add("policy_term", "Policy term must be at least one month");
        }
        if record.base_fee.is_negative() {
            errors.add("base_fee", "Base fee cannot be negative");
        }
        if record.effective_date < self.clock.today() {
            errors.add("effective_date", EFFECTIVE_DATE_IN_PAST);
        }
        Self::check_zip(&record.property_zip, &mut errors);

        errors.into_result()
    }

    fn check_zip(zip: &str, errors: &mut ValidationErrors) {
        if zip.trim().is_empty() {
            errors.add("property_zip", "This field may not be blank.");
        } else if zip.chars().count() > PROPERTY_ZIP_MAX_LENGTH {
            errors.add(
                "property_zip",
                format!("Ensure this field has no more than {PROPERTY_ZIP_MAX_LENGTH} characters."),
            );
        }
    }
}

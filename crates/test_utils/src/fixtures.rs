//! Pre-built Test Fixtures
//!
//! Provides ready-to-use quote requests, dates and reference figures.
//! The rating fixtures are the three worked examples every premium test
//! should agree with.

use chrono::{Days, NaiveDate, Utc};
use fake::faker::address::en::ZipCode;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Money, QuoteId};
use domain_quote::{NewQuote, StateCode};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard monthly base fee
    pub fn base_fee() -> Money {
        Money::usd(dec!(59.94))
    }
}

/// Fixture for dates relative to the current day
pub struct DateFixtures;

impl DateFixtures {
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn yesterday() -> NaiveDate {
        Self::today() - Days::new(1)
    }

    pub fn next_month() -> NaiveDate {
        Self::today() + Days::new(30)
    }
}

/// Fixture for quote requests
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// A request that passes validation against today's date
    pub fn request(state: StateCode, prev_policy_cancelled: bool, owns_insure_property: bool) -> NewQuote {
        NewQuote {
            effective_date: DateFixtures::next_month(),
            prev_policy_cancelled,
            owns_insure_property,
            property_zip: Self::zip(),
            property_state: state,
        }
    }

    /// Utah, never cancelled, not an owner
    pub fn volcanic_never_cancelled() -> NewQuote {
        Self::request(StateCode::UT, false, false)
    }

    /// Arkansas, never cancelled, not an owner
    pub fn non_volcanic_never_cancelled() -> NewQuote {
        Self::request(StateCode::AR, false, false)
    }

    /// Arkansas, previously cancelled, owns the property
    pub fn cancelled_owner() -> NewQuote {
        Self::request(StateCode::AR, true, true)
    }

    /// A random US postal code
    pub fn zip() -> String {
        ZipCode().fake()
    }

    pub fn quote_id() -> QuoteId {
        QuoteId::parse("TEST000001").expect("valid quote id")
    }
}

/// Reference monthly figures for the standard base fee, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedMonthly {
    pub fees: Decimal,
    pub discounts: Decimal,
    pub premium: Decimal,
}

/// Worked rating examples
pub struct RatingFixtures;

impl RatingFixtures {
    /// Utah, never cancelled, not an owner
    pub fn volcanic_never_cancelled() -> ExpectedMonthly {
        ExpectedMonthly {
            fees: dec!(14.985),
            discounts: dec!(-5.994),
            premium: dec!(68.931),
        }
    }

    /// Arkansas, never cancelled, not an owner
    pub fn non_volcanic_never_cancelled() -> ExpectedMonthly {
        ExpectedMonthly {
            fees: dec!(0),
            discounts: dec!(-5.994),
            premium: dec!(53.946),
        }
    }

    /// Arkansas, previously cancelled, owns the property
    pub fn cancelled_owner() -> ExpectedMonthly {
        ExpectedMonthly {
            fees: dec!(8.991),
            discounts: dec!(-11.988),
            premium: dec!(56.943),
        }
    }

    /// Base fee times the standard six-month term
    pub fn base_premium() -> Decimal {
        dec!(359.64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_zip_fits_column() {
        for _ in 0..50 {
            let zip = QuoteFixtures::zip();
            assert!(!zip.is_empty());
            assert!(zip.len() <= 10, "{zip}");
        }
    }

    #[test]
    fn test_reference_figures_are_consistent() {
        for expected in [
            RatingFixtures::volcanic_never_cancelled(),
            RatingFixtures::non_volcanic_never_cancelled(),
            RatingFixtures::cancelled_owner(),
        ] {
            assert_eq!(
                expected.premium,
                MoneyFixtures::base_fee().amount() + expected.fees + expected.discounts
            );
        }
    }
}

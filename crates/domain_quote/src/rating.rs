//! Premium rating engine
//!
//! Derives fees, discounts and premiums for a [`QuoteRecord`] from a
//! [`RateTable`]. Every function is pure: same record and table, same figures.
//! Amounts stay exact throughout; only [`PremiumBreakdown::rounded`] rounds.
//!
//! # Adjustments
//!
//! ```text
//! volcanic state          -> fee      (+25% of base fee)
//! previous policy history -> fee      (+15%, cancelled by insurer)
//!                         or discount (-10%, never cancelled)
//! owns property           -> discount (-20%)
//! ```
//!
//! The policy-history adjustment is computed once and tagged with its
//! category, so it lands in exactly one of the two totals.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::quote::QuoteRecord;
use crate::rate_table::RateTable;

/// Which total an adjustment contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentCategory {
    Fee,
    Discount,
}

/// A signed amount tagged as a fee or a discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub amount: Money,
    pub category: AdjustmentCategory,
}

impl Adjustment {
    pub fn fee(amount: Money) -> Self {
        Self {
            amount,
            category: AdjustmentCategory::Fee,
        }
    }

    pub fn discount(amount: Money) -> Self {
        Self {
            amount,
            category: AdjustmentCategory::Discount,
        }
    }

    pub fn is_fee(&self) -> bool {
        self.category == AdjustmentCategory::Fee
    }

    pub fn is_discount(&self) -> bool {
        self.category == AdjustmentCategory::Discount
    }

    /// The amount if this is a fee, zero otherwise
    pub fn fee_part(&self) -> Money {
        match self.category {
            AdjustmentCategory::Fee => self.amount,
            AdjustmentCategory::Discount => Money::zero(self.amount.currency()),
        }
    }

    /// The amount if this is a discount, zero otherwise
    pub fn discount_part(&self) -> Money {
        match self.category {
            AdjustmentCategory::Fee => Money::zero(self.amount.currency()),
            AdjustmentCategory::Discount => self.amount,
        }
    }
}

/// Every figure shown at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub base_premium: Money,
    pub total_term_premium: Money,
    pub total_monthly_premium: Money,
    pub total_additional_term_fees: Money,
    pub total_monthly_fees: Money,
    pub total_term_discounts: Money,
    pub total_monthly_discounts: Money,
}

impl PremiumBreakdown {
    /// Rounds every figure to its currency's precision for presentation
    pub fn rounded(&self) -> Self {
        Self {
            base_premium: self.base_premium.round_to_currency(),
            total_term_premium: self.total_term_premium.round_to_currency(),
            total_monthly_premium: self.total_monthly_premium.round_to_currency(),
            total_additional_term_fees: self.total_additional_term_fees.round_to_currency(),
            total_monthly_fees: self.total_monthly_fees.round_to_currency(),
            total_term_discounts: self.total_term_discounts.round_to_currency(),
            total_monthly_discounts: self.total_monthly_discounts.round_to_currency(),
        }
    }
}

/// Stateless calculator over a rate table
#[derive(Debug, Clone, Copy)]
pub struct RatingEngine<'a> {
    rates: &'a RateTable,
}

impl RatingEngine<'static> {
    /// Engine over the standard rate table
    pub fn standard() -> Self {
        Self::new(RateTable::standard())
    }
}

impl<'a> RatingEngine<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        self.rates
    }

    /// Surcharge for a property in a volcanic state, zero elsewhere
    pub fn volcanic_state_fee(&self, record: &QuoteRecord) -> Money {
        if self.rates.is_volcanic(record.property_state) {
            self.rates.volcanic_state_fee.apply(&record.base_fee)
        } else {
            Money::zero(record.base_fee.currency())
        }
    }

    /// Reduction for applicants who own the property, zero otherwise
    pub fn property_owner_discount(&self, record: &QuoteRecord) -> Money {
        if record.owns_insure_property {
            self.rates.property_owner_discount.apply(&record.base_fee)
        } else {
            Money::zero(record.base_fee.currency())
        }
    }

    /// Cancellation fee or loyalty discount; always exactly one of the two
    pub fn previous_policy_cancelled_amount(&self, record: &QuoteRecord) -> Adjustment {
        if record.prev_policy_cancelled {
            Adjustment::fee(self.rates.prev_policy_cancelled_fee.apply(&record.base_fee))
        } else {
            Adjustment::discount(self.rates.never_cancelled_discount.apply(&record.base_fee))
        }
    }

    pub fn total_monthly_fees(&self, record: &QuoteRecord) -> Money {
        self.volcanic_state_fee(record) + self.previous_policy_cancelled_amount(record).fee_part()
    }

    pub fn total_monthly_discounts(&self, record: &QuoteRecord) -> Money {
        self.previous_policy_cancelled_amount(record).discount_part()
            + self.property_owner_discount(record)
    }

    /// Base fee over the whole term, before adjustments
    pub fn base_premium(&self, record: &QuoteRecord) -> Money {
        record.base_fee.times(record.policy_term)
    }

    pub fn total_monthly_premium(&self, record: &QuoteRecord) -> Money {
        record.base_fee + self.total_monthly_discounts(record) + self.total_monthly_fees(record)
    }

    pub fn total_term_premium(&self, record: &QuoteRecord) -> Money {
        self.total_monthly_premium(record).times(record.policy_term)
    }

    pub fn total_additional_term_fees(&self, record: &QuoteRecord) -> Money {
        self.total_monthly_fees(record).times(record.policy_term)
    }

    pub fn total_term_discounts(&self, record: &QuoteRecord) -> Money {
        self.total_monthly_discounts(record).times(record.policy_term)
    }

    /// All checkout figures, unrounded
    pub fn breakdown(&self, record: &QuoteRecord) -> PremiumBreakdown {
        let monthly_fees = self.total_monthly_fees(record);
        let monthly_discounts = self.total_monthly_discounts(record);
        let monthly_premium = record.base_fee + monthly_discounts + monthly_fees;

        PremiumBreakdown {
            base_premium: self.base_premium(record),
            total_term_premium: monthly_premium.times(record.policy_term),
            total_monthly_premium: monthly_premium,
            total_additional_term_fees: monthly_fees.times(record.policy_term),
            total_monthly_fees: monthly_fees,
            total_term_discounts: monthly_discounts.times(record.policy_term),
            total_monthly_discounts: monthly_discounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use core_kernel::{Currency, QuoteId, QuoteRecordId};
    use rust_decimal_macros::dec;

    use crate::quote::{NewQuote, NewQuoteRecord};
    use crate::state::StateCode;

    fn record(cancelled: bool, owner: bool, state: StateCode) -> QuoteRecord {
        NewQuoteRecord::from_request(
            QuoteId::parse("TEST000001").unwrap(),
            NewQuote {
                effective_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                prev_policy_cancelled: cancelled,
                owns_insure_property: owner,
                property_zip: "84116".to_string(),
                property_state: state,
            },
        )
        .into_record(QuoteRecordId::new(), Utc::now())
    }

    #[test]
    fn test_volcanic_state_never_cancelled() {
        let engine = RatingEngine::standard();
        let quote = record(false, false, StateCode::UT);

        assert_eq!(engine.volcanic_state_fee(&quote).amount(), dec!(14.985));
        assert_eq!(engine.total_monthly_fees(&quote).amount(), dec!(14.985));
        assert_eq!(engine.total_monthly_discounts(&quote).amount(), dec!(-5.994));
        assert_eq!(engine.total_monthly_premium(&quote).amount(), dec!(68.931));
    }

    #[test]
    fn test_figures_keep_the_base_fee_currency() {
        let engine = RatingEngine::standard();
        let mut quote = record(false, true, StateCode::AR);
        quote.base_fee = Money::new(dec!(100), Currency::JPY);

        let breakdown = engine.breakdown(&quote);
        assert_eq!(breakdown.total_monthly_fees.currency(), Currency::JPY);
        assert_eq!(breakdown.total_monthly_premium, Money::new(dec!(70), Currency::JPY));
        assert_eq!(breakdown.rounded().base_premium.amount(), dec!(600));
    }

    #[test]
    fn test_non_volcanic_state_never_cancelled() {
        let engine = RatingEngine::standard();
        let quote = record(false, false, StateCode::AR);

        assert!(engine.total_monthly_fees(&quote).is_zero());
        assert_eq!(engine.total_monthly_discounts(&quote).amount(), dec!(-5.994));
        assert_eq!(engine.total_monthly_premium(&quote).amount(), dec!(53.946));
    }

    #[test]
    fn test_cancelled_owner_non_volcanic() {
        let engine = RatingEngine::standard();
        let quote = record(true, true, StateCode::AR);

        let history = engine.previous_policy_cancelled_amount(&quote);
        assert!(history.is_fee());
        assert_eq!(history.amount.amount(), dec!(8.991));
        assert_eq!(engine.property_owner_discount(&quote).amount(), dec!(-11.988));
        assert_eq!(engine.total_monthly_premium(&quote).amount(), dec!(56.943));
    }

    #[test]
    fn test_base_premium() {
        let quote = record(false, false, StateCode::AR);
        assert_eq!(RatingEngine::standard().base_premium(&quote).amount(), dec!(359.64));
    }

    #[test]
    fn test_breakdown_matches_individual_functions() {
        let engine = RatingEngine::standard();
        let quote = record(true, false, StateCode::CA);
        let breakdown = engine.breakdown(&quote);

        assert_eq!(breakdown.total_monthly_premium, engine.total_monthly_premium(&quote));
        assert_eq!(breakdown.total_term_premium, engine.total_term_premium(&quote));
        assert_eq!(breakdown.total_additional_term_fees, engine.total_additional_term_fees(&quote));
        assert_eq!(breakdown.total_term_discounts, engine.total_term_discounts(&quote));
    }

    #[test]
    fn test_rounded_breakdown() {
        let breakdown = RatingEngine::standard()
            .breakdown(&record(false, false, StateCode::UT))
            .rounded();

        assert_eq!(breakdown.total_monthly_premium.amount(), dec!(68.93));
        assert_eq!(breakdown.total_monthly_fees.amount(), dec!(14.98));
        assert_eq!(breakdown.total_monthly_discounts.amount(), dec!(-5.99));
        assert_eq!(breakdown.total_term_premium.amount(), dec!(413.59));
    }

    #[test]
    fn test_adjustment_parts() {
        let fee = Adjustment::fee(Money::usd(dec!(1.5)));
        assert_eq!(fee.fee_part().amount(), dec!(1.5));
        assert!(fee.discount_part().is_zero());

        let discount = Adjustment::discount(Money::usd(dec!(-2)));
        assert!(discount.fee_part().is_zero());
        assert_eq!(discount.discount_part().amount(), dec!(-2));
    }
}

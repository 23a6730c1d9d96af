//! Property tests for the rating engine

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Rate;
use domain_quote::{RateTable, RatingEngine, StateCode};
use test_utils::{
    assert_breakdown_consistent, fine_base_fee_strategy, quote_record_strategy, state_strategy,
    QuoteRecordBuilder,
};

proptest! {
    #[test]
    fn breakdown_identities_hold_exactly(record in quote_record_strategy()) {
        let breakdown = RatingEngine::standard().breakdown(&record);
        assert_breakdown_consistent(&breakdown, &record);
    }

    #[test]
    fn exactly_one_history_adjustment_applies(record in quote_record_strategy()) {
        let engine = RatingEngine::standard();
        let history = engine.previous_policy_cancelled_amount(&record);

        prop_assert_eq!(history.is_fee(), record.prev_policy_cancelled);
        prop_assert_eq!(history.is_discount(), !record.prev_policy_cancelled);
        prop_assert!(history.fee_part().is_zero() || history.discount_part().is_zero());
    }

    #[test]
    fn volcanic_fee_iff_volcanic_state(record in quote_record_strategy()) {
        let engine = RatingEngine::standard();
        let fee = engine.volcanic_state_fee(&record);

        prop_assert_eq!(!fee.is_zero(), engine.rates().is_volcanic(record.property_state));
        prop_assert!(!fee.is_negative());
    }

    #[test]
    fn owner_discount_iff_owner(record in quote_record_strategy()) {
        let discount = RatingEngine::standard().property_owner_discount(&record);

        prop_assert_eq!(!discount.is_zero(), record.owns_insure_property);
        prop_assert!(!discount.is_positive());
    }

    #[test]
    fn fees_never_negative_and_discounts_never_positive(record in quote_record_strategy()) {
        let engine = RatingEngine::standard();
        prop_assert!(!engine.total_monthly_fees(&record).is_negative());
        prop_assert!(!engine.total_monthly_discounts(&record).is_positive());
    }

    #[test]
    fn rating_is_pure(record in quote_record_strategy()) {
        let engine = RatingEngine::standard();
        prop_assert_eq!(engine.breakdown(&record), engine.breakdown(&record));
    }

    #[test]
    fn rounding_moves_each_figure_by_at_most_half_a_cent(record in quote_record_strategy()) {
        let exact = RatingEngine::standard().breakdown(&record);
        let rounded = exact.rounded();

        for (e, r) in [
            (exact.total_monthly_premium, rounded.total_monthly_premium),
            (exact.total_term_premium, rounded.total_term_premium),
            (exact.total_monthly_fees, rounded.total_monthly_fees),
            (exact.total_monthly_discounts, rounded.total_monthly_discounts),
        ] {
            prop_assert!((e.amount() - r.amount()).abs() <= dec!(0.005));
            prop_assert!(r.amount().scale() <= 2);
        }
    }

    #[test]
    fn zero_base_fee_prices_to_zero(
        state in state_strategy(),
        cancelled in any::<bool>(),
        owner in any::<bool>(),
    ) {
        let record = QuoteRecordBuilder::new()
            .with_base_fee(Decimal::ZERO)
            .with_property_state(state)
            .with_prev_policy_cancelled(cancelled)
            .with_owns_insure_property(owner)
            .build();

        let breakdown = RatingEngine::standard().breakdown(&record);
        prop_assert!(breakdown.total_term_premium.is_zero());
        prop_assert!(breakdown.total_monthly_fees.is_zero());
        prop_assert!(breakdown.total_monthly_discounts.is_zero());
    }

    #[test]
    fn custom_rate_table_is_honoured(base_fee in fine_base_fee_strategy()) {
        let mut rates = RateTable::standard().clone();
        rates.volcanic_state_fee = Rate::new(dec!(0.50));
        let record = QuoteRecordBuilder::new()
            .with_base_fee(base_fee)
            .with_property_state(StateCode::HI)
            .build();

        let fee = RatingEngine::new(&rates).volcanic_state_fee(&record);
        prop_assert_eq!(fee.amount(), base_fee * dec!(0.50));
    }
}

//! Worked rating examples

use rust_decimal_macros::dec;

use domain_quote::{RatingEngine, StateCode};
use test_utils::{
    assert_money_eq, assert_money_zero, QuoteRecordBuilder, RatingFixtures,
};

fn record(state: StateCode, cancelled: bool, owner: bool) -> domain_quote::QuoteRecord {
    QuoteRecordBuilder::new()
        .with_property_state(state)
        .with_prev_policy_cancelled(cancelled)
        .with_owns_insure_property(owner)
        .build()
}

#[test]
fn volcanic_state_never_cancelled() {
    let engine = RatingEngine::standard();
    let quote = record(StateCode::UT, false, false);
    let expected = RatingFixtures::volcanic_never_cancelled();

    assert_money_eq(&engine.volcanic_state_fee(&quote), dec!(14.985));
    assert_money_eq(&engine.total_monthly_fees(&quote), expected.fees);
    assert_money_eq(&engine.total_monthly_discounts(&quote), expected.discounts);
    assert_money_eq(&engine.total_monthly_premium(&quote), expected.premium);

    let rounded = engine.breakdown(&quote).rounded();
    assert_money_eq(&rounded.total_monthly_premium, dec!(68.93));
}

#[test]
fn non_volcanic_state_never_cancelled() {
    let engine = RatingEngine::standard();
    let quote = record(StateCode::AR, false, false);
    let expected = RatingFixtures::non_volcanic_never_cancelled();

    assert_money_zero(&engine.volcanic_state_fee(&quote));
    assert_money_eq(&engine.total_monthly_fees(&quote), expected.fees);
    assert_money_eq(&engine.total_monthly_discounts(&quote), expected.discounts);
    assert_money_eq(&engine.total_monthly_premium(&quote), expected.premium);

    let rounded = engine.breakdown(&quote).rounded();
    assert_money_eq(&rounded.total_monthly_premium, dec!(53.95));
}

#[test]
fn cancelled_owner_non_volcanic() {
    let engine = RatingEngine::standard();
    let quote = record(StateCode::AR, true, true);
    let expected = RatingFixtures::cancelled_owner();

    assert_money_eq(&engine.previous_policy_cancelled_amount(&quote).amount, dec!(8.991));
    assert_money_eq(&engine.property_owner_discount(&quote), dec!(-11.988));
    assert_money_eq(&engine.total_monthly_fees(&quote), expected.fees);
    assert_money_eq(&engine.total_monthly_discounts(&quote), expected.discounts);
    assert_money_eq(&engine.total_monthly_premium(&quote), expected.premium);

    let rounded = engine.breakdown(&quote).rounded();
    assert_money_eq(&rounded.total_monthly_premium, dec!(56.94));
}

#[test]
fn base_premium_for_standard_fee_and_term() {
    let quote = record(StateCode::AR, false, false);
    assert_money_eq(
        &RatingEngine::standard().base_premium(&quote),
        RatingFixtures::base_premium(),
    );
}

#[test]
fn term_figures_scale_with_term() {
    let engine = RatingEngine::standard();
    let quote = QuoteRecordBuilder::new()
        .with_base_fee(dec!(100))
        .with_policy_term(12)
        .with_property_state(StateCode::WA)
        .with_prev_policy_cancelled(true)
        .with_owns_insure_property(true)
        .build();

    // fees 25 + 15, discounts -20
    assert_money_eq(&engine.total_monthly_premium(&quote), dec!(120));
    assert_money_eq(&engine.total_term_premium(&quote), dec!(1440));
    assert_money_eq(&engine.total_additional_term_fees(&quote), dec!(480));
    assert_money_eq(&engine.total_term_discounts(&quote), dec!(-240));
}

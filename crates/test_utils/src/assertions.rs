//! Custom Test Assertions
//!
//! Assertion helpers for money and premium breakdowns that give more
//! meaningful failure messages than a bare `assert_eq!`.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_quote::{PremiumBreakdown, QuoteRecord};

/// Asserts that a Money value has exactly the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {money}");
}

/// Asserts that a decimal string has exactly two fractional digits
pub fn assert_two_decimal_places(value: &str) {
    let (_, fraction) = value
        .split_once('.')
        .unwrap_or_else(|| panic!("Expected two decimal places, got {value:?}"));
    assert_eq!(fraction.len(), 2, "Expected two decimal places, got {value:?}");
}

/// Asserts the identities that tie a breakdown to its record
///
/// # Panics
///
/// Panics if monthly premium is not base fee plus fees plus discounts, or if a
/// term figure is not its monthly figure times the policy term.
pub fn assert_breakdown_consistent(breakdown: &PremiumBreakdown, record: &QuoteRecord) {
    let term = record.policy_term;

    assert_eq!(
        breakdown.total_monthly_premium,
        record.base_fee + breakdown.total_monthly_fees + breakdown.total_monthly_discounts,
        "monthly premium != base fee + fees + discounts"
    );
    assert_eq!(
        breakdown.total_term_premium,
        breakdown.total_monthly_premium.times(term),
        "term premium != monthly premium x {term}"
    );
    assert_eq!(
        breakdown.total_additional_term_fees,
        breakdown.total_monthly_fees.times(term),
        "term fees != monthly fees x {term}"
    );
    assert_eq!(
        breakdown.total_term_discounts,
        breakdown.total_monthly_discounts.times(term),
        "term discounts != monthly discounts x {term}"
    );
    assert_eq!(
        breakdown.base_premium,
        record.base_fee.times(term),
        "base premium != base fee x {term}"
    );
}

//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote records that respect
//! the record rules: positive term, non-negative base fee, valid quote id.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{QuoteId, QuoteRecordId};
use domain_quote::{QuoteRecord, StateCode};

use crate::builders::QuoteRecordBuilder;

/// Strategy for any recognized jurisdiction
pub fn state_strategy() -> impl Strategy<Value = StateCode> {
    proptest::sample::select(StateCode::ALL)
}

/// Strategy for monthly base fees from 0.01 to 10,000.00
pub fn base_fee_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for base fees with up to four decimal places, zero included
pub fn fine_base_fee_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64, 0u32..=4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for policy terms of one to sixty months
pub fn policy_term_strategy() -> impl Strategy<Value = u32> {
    1u32..=60u32
}

/// Strategy for well-formed quote numbers
pub fn quote_id_strategy() -> impl Strategy<Value = QuoteId> {
    "[A-Z0-9]{10}".prop_map(|s| QuoteId::parse(&s).expect("pattern matches quote id format"))
}

/// Strategy for effective dates within the next few years
pub fn effective_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let today = Utc::now().date_naive();
    (0u64..2000u64).prop_map(move |days| today + chrono::Days::new(days))
}

/// Strategy for complete stored records
pub fn quote_record_strategy() -> impl Strategy<Value = QuoteRecord> {
    (
        quote_id_strategy(),
        base_fee_strategy(),
        policy_term_strategy(),
        effective_date_strategy(),
        any::<bool>(),
        any::<bool>(),
        "[0-9]{5}",
        state_strategy(),
    )
        .prop_map(
            |(quote_id, base_fee, term, date, cancelled, owner, zip, state)| {
                QuoteRecordBuilder::new()
                    .with_id(QuoteRecordId::new())
                    .with_quote_id(quote_id)
                    .with_base_fee(base_fee)
                    .with_policy_term(term)
                    .with_effective_date(date)
                    .with_prev_policy_cancelled(cancelled)
                    .with_owns_insure_property(owner)
                    .with_property_zip(zip)
                    .with_property_state(state)
                    .build()
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_records_follow_record_rules(record in quote_record_strategy()) {
            prop_assert!(record.policy_term >= 1);
            prop_assert!(record.base_fee.is_positive());
            prop_assert_eq!(record.quote_id.as_str().len(), 10);
            prop_assert_eq!(record.property_zip.len(), 5);
        }
    }
}

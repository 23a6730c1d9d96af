//! Quote DTOs
//!
//! Request fields arrive as loose JSON so every problem can be reported per
//! field; `quote_id`, `base_fee` and `policy_term` in a request body are
//! ignored because the server assigns them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::Money;
use domain_quote::{
    parse_effective_date, parse_property_state, CheckoutQuote, NewQuote, QuoteRecord,
    ValidationErrors,
};

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    pub effective_date: Option<String>,
    pub prev_policy_cancelled: Option<bool>,
    pub owns_insure_property: Option<bool>,
    #[validate(length(max = 10, message = "Ensure this field has no more than 10 characters."))]
    pub property_zip: Option<String>,
    pub property_state: Option<String>,
}

impl CreateQuoteRequest {
    /// Parses the request into a domain request, collecting every field error
    pub fn into_new_quote(self) -> Result<NewQuote, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = self.validate() {
            for (field, field_errors) in e.field_errors() {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    errors.add(field.to_string(), message);
                }
            }
        }

        let effective_date = match self.effective_date.as_deref() {
            Some(raw) => parse_effective_date(raw).map_err(|e| errors.merge(e)).ok(),
            None => {
                errors.add("effective_date", REQUIRED);
                None
            }
        };

        let property_state = match self.property_state.as_deref() {
            Some(raw) => parse_property_state(raw).map_err(|e| errors.merge(e)).ok(),
            None => {
                errors.add("property_state", REQUIRED);
                None
            }
        };

        if self.property_zip.is_none() {
            errors.add("property_zip", REQUIRED);
        }

        match (effective_date, property_state, self.property_zip) {
            (Some(effective_date), Some(property_state), Some(property_zip)) if errors.is_empty() => {
                Ok(NewQuote {
                    effective_date,
                    prev_policy_cancelled: self.prev_policy_cancelled.unwrap_or(false),
                    owns_insure_property: self.owns_insure_property.unwrap_or(false),
                    property_zip,
                    property_state,
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub quote_id: String,
    pub base_fee: Decimal,
    pub policy_term: u32,
    pub effective_date: NaiveDate,
    pub prev_policy_cancelled: bool,
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: String,
    pub created_at: DateTime<Utc>,
}

impl From<QuoteRecord> for QuoteResponse {
    fn from(record: QuoteRecord) -> Self {
        Self {
            id: *record.id.as_uuid(),
            quote_id: record.quote_id.to_string(),
            base_fee: record.base_fee.amount(),
            policy_term: record.policy_term,
            effective_date: record.effective_date,
            prev_policy_cancelled: record.prev_policy_cancelled,
            owns_insure_property: record.owns_insure_property,
            property_zip: record.property_zip,
            property_state: record.property_state.to_string(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    pub quote: Option<String>,
}

/// Checkout figures, each rounded half-to-even to the currency's precision
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub id: Uuid,
    pub quote_id: String,
    pub effective_date: NaiveDate,
    pub base_premium: Decimal,
    pub total_term_premium: Decimal,
    pub total_monthly_premium: Decimal,
    pub total_additional_term_fees: Decimal,
    pub total_monthly_fees: Decimal,
    pub total_term_discounts: Decimal,
    pub total_monthly_discounts: Decimal,
}

impl From<CheckoutQuote> for CheckoutResponse {
    fn from(checkout: CheckoutQuote) -> Self {
        let figures = checkout.breakdown.rounded();
        Self {
            id: *checkout.record.id.as_uuid(),
            quote_id: checkout.record.quote_id.to_string(),
            effective_date: checkout.record.effective_date,
            base_premium: fixed_scale(figures.base_premium),
            total_term_premium: fixed_scale(figures.total_term_premium),
            total_monthly_premium: fixed_scale(figures.total_monthly_premium),
            total_additional_term_fees: fixed_scale(figures.total_additional_term_fees),
            total_monthly_fees: fixed_scale(figures.total_monthly_fees),
            total_term_discounts: fixed_scale(figures.total_term_discounts),
            total_monthly_discounts: fixed_scale(figures.total_monthly_discounts),
        }
    }
}

/// Pads a rounded amount so it always prints with the currency's decimal places
fn fixed_scale(money: Money) -> Decimal {
    let mut amount = money.amount();
    amount.rescale(money.currency().decimal_places());
    amount
}

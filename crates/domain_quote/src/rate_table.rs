//! Rate table configuration
//!
//! All rating factors live in one immutable [`RateTable`]. The standard table
//! is built in; an alternative can be loaded from JSON at process start, which
//! keeps the factors auditable and swappable without touching the rating code.
//!
//! ```json
//! {
//!   "volcanic_state_fee": "0.25",
//!   "prev_policy_cancelled_fee": "0.15",
//!   "never_cancelled_discount": "-0.10",
//!   "property_owner_discount": "-0.20",
//!   "volcanic_states": ["AK", "AZ", "CA", "CO", "HI", "ID", "NV", "NM", "OR", "UT", "WA", "WY"]
//! }
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::Rate;

use crate::state::StateCode;

/// Errors raised while loading a rate table
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("Failed to read rate table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rate table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A factor has the wrong sign for its role
    #[error("Invalid rate table: {0}")]
    Invalid(String),
}

/// Multipliers applied to a quote's base fee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Surcharge for properties in a volcanic state
    pub volcanic_state_fee: Rate,
    /// Surcharge when the previous policy was cancelled by the insurer
    pub prev_policy_cancelled_fee: Rate,
    /// Reduction when the previous policy was never cancelled
    pub never_cancelled_discount: Rate,
    /// Reduction when the applicant owns the insured property
    pub property_owner_discount: Rate,
    /// States subject to the volcanic surcharge
    pub volcanic_states: BTreeSet<StateCode>,
}

static STANDARD: Lazy<RateTable> = Lazy::new(|| RateTable {
    volcanic_state_fee: Rate::new(dec!(0.25)),
    prev_policy_cancelled_fee: Rate::new(dec!(0.15)),
    never_cancelled_discount: Rate::new(dec!(-0.10)),
    property_owner_discount: Rate::new(dec!(-0.20)),
    volcanic_states: [
        StateCode::AK,
        StateCode::AZ,
        StateCode::CA,
        StateCode::CO,
        StateCode::HI,
        StateCode::ID,
        StateCode::NV,
        StateCode::NM,
        StateCode::OR,
        StateCode::UT,
        StateCode::WA,
        StateCode::WY,
    ]
    .into_iter()
    .collect(),
});

impl RateTable {
    /// The production rate table
    pub fn standard() -> &'static RateTable {
        &STANDARD
    }

    pub fn is_volcanic(&self, state: StateCode) -> bool {
        self.volcanic_states.contains(&state)
    }

    /// Parses and checks a rate table from JSON text
    pub fn from_json(json: &str) -> Result<Self, RateTableError> {
        let table: RateTable = serde_json::from_str(json)?;
        table.check()?;
        Ok(table)
    }

    /// Reads a rate table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RateTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Fees are non-negative and discounts non-positive
    fn check(&self) -> Result<(), RateTableError> {
        let fees = [
            ("volcanic_state_fee", self.volcanic_state_fee),
            ("prev_policy_cancelled_fee", self.prev_policy_cancelled_fee),
        ];
        let discounts = [
            ("never_cancelled_discount", self.never_cancelled_discount),
            ("property_owner_discount", self.property_owner_discount),
        ];

        for (name, rate) in fees {
            if rate.as_decimal().is_sign_negative() && !rate.as_decimal().is_zero() {
                return Err(RateTableError::Invalid(format!("{name} must not be negative")));
            }
        }
        for (name, rate) in discounts {
            if rate.as_decimal().is_sign_positive() && !rate.as_decimal().is_zero() {
                return Err(RateTableError::Invalid(format!("{name} must not be positive")));
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_volcanic_states() {
        let table = RateTable::standard();
        assert_eq!(table.volcanic_states.len(), 12);
        assert!(table.is_volcanic(StateCode::HI));
        assert!(!table.is_volcanic(StateCode::AR));
    }

    #[test]
    fn test_standard_round_trips_through_json() {
        let json = serde_json::to_string(RateTable::standard()).unwrap();
        let parsed = RateTable::from_json(&json).unwrap();
        assert_eq!(&parsed, RateTable::standard());
    }

    #[test]
    fn test_from_json_rejects_positive_discount() {
        let json = r#"{
            "volcanic_state_fee": "0.25",
            "prev_policy_cancelled_fee": "0.15",
            "never_cancelled_discount": "0.10",
            "property_owner_discount": "-0.20",
            "volcanic_states": []
        }"#;
        let err = RateTable::from_json(json).unwrap_err();
        assert!(err.to_string().contains("never_cancelled_discount"));
    }

    #[test]
    fn test_from_json_rejects_unknown_state() {
        let json = r#"{
            "volcanic_state_fee": "0.25",
            "prev_policy_cancelled_fee": "0.15",
            "never_cancelled_discount": "-0.10",
            "property_owner_discount": "-0.20",
            "volcanic_states": ["ZZ"]
        }"#;
        assert!(matches!(RateTable::from_json(json), Err(RateTableError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RateTable::load("/nonexistent/rates.json").unwrap_err();
        assert!(matches!(err, RateTableError::Io { .. }));
    }
}

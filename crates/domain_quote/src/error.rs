//! Quote domain errors

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;

/// Field-level validation failures, keyed by field name
///
/// Serializes as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single failure
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(message.into());
    }

    /// Moves every failure from `other` into `self`
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// `Ok(())` when empty, otherwise the collected failures
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The quote request failed validation
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// No stored quote has the requested record id
    #[error("Quote not found: {0}")]
    NotFound(String),

    /// Checkout referenced a quote number that does not exist
    #[error("Select a valid choice. {0} is not one of the available choices.")]
    UnknownQuote(String),

    /// Every generated quote number collided with an existing one
    #[error("Could not allocate a unique quote id after {attempts} attempts")]
    QuoteIdExhausted { attempts: u32 },

    /// The quote store failed
    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl QuoteError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuoteError::Validation(ValidationErrors::single(field, message))
    }

    pub fn not_found(id: impl fmt::Display) -> Self {
        QuoteError::NotFound(id.to_string())
    }
}

impl From<ValidationErrors> for QuoteError {
    fn from(errors: ValidationErrors) -> Self {
        QuoteError::Validation(errors)
    }
}

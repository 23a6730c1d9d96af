//! Strongly-typed identifiers for domain entities
//!
//! Persistent record identifiers are newtype wrappers around UUIDs. The public
//! quote number handed to customers is a short alphanumeric code with its own
//! validated type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Internal storage key of a quote record
define_id!(QuoteRecordId, "QTE");

/// Errors raised when parsing a public quote number
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteIdError {
    #[error("Quote id must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Quote id contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Public quote number: exactly ten characters drawn from `A-Z` and `0-9`
///
/// Construction goes through [`QuoteId::parse`] or
/// [`QuoteId::from_alphabet_indices`], so a value of this type is well-formed
/// by definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId(String);

impl QuoteId {
    pub const LENGTH: usize = 10;

    /// Characters a quote id may contain
    pub const ALPHABET: &'static [u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    pub fn parse(value: &str) -> Result<Self, QuoteIdError> {
        let actual = value.chars().count();
        if actual != Self::LENGTH {
            return Err(QuoteIdError::InvalidLength {
                expected: Self::LENGTH,
                actual,
            });
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        {
            return Err(QuoteIdError::InvalidCharacter(bad));
        }
        Ok(Self(value.to_string()))
    }

    /// Builds a quote id by picking one [`ALPHABET`](Self::ALPHABET) character per index
    ///
    /// Indices wrap around the alphabet, so every input is valid.
    pub fn from_alphabet_indices(indices: [usize; Self::LENGTH]) -> Self {
        Self(
            indices
                .iter()
                .map(|&i| Self::ALPHABET[i % Self::ALPHABET.len()] as char)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuoteId {
    type Err = QuoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QuoteId {
    type Error = QuoteIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> String {
        id.0
    }
}

impl AsRef<str> for QuoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

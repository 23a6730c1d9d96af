//! Jurisdiction codes a property may be located in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a two-letter code is not a recognized jurisdiction
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a valid choice")]
pub struct UnknownStateCode(pub String);

macro_rules! state_codes {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Two-letter postal code of a US state, district or territory
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum StateCode {
            $($variant,)+
        }

        impl StateCode {
            /// Every recognized code, in alphabetical order
            pub const ALL: &'static [StateCode] = &[$(StateCode::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StateCode::$variant => stringify!($variant),)+
                }
            }

            /// Full jurisdiction name
            pub fn name(&self) -> &'static str {
                match self {
                    $(StateCode::$variant => $name,)+
                }
            }
        }

        impl FromStr for StateCode {
            type Err = UnknownStateCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(StateCode::$variant),)+
                    other => Err(UnknownStateCode(other.to_string())),
                }
            }
        }
    };
}

state_codes! {
    AK => "Alaska",
    AL => "Alabama",
    AR => "Arkansas",
    AS => "American Samoa",
    AZ => "Arizona",
    CA => "California",
    CM => "Northern Mariana Islands",
    CO => "Colorado",
    CT => "Connecticut",
    DC => "District of Columbia",
    DE => "Delaware",
    FL => "Florida",
    GA => "Georgia",
    GU => "Guam",
    HI => "Hawaii",
    IA => "Iowa",
    ID => "Idaho",
    IL => "Illinois",
    IN => "Indiana",
    KS => "Kansas",
    KY => "Kentucky",
    LA => "Louisiana",
    MA => "Massachusetts",
    MD => "Maryland",
    ME => "Maine",
    MI => "Michigan",
    MN => "Minnesota",
    MO => "Missouri",
    MS => "Mississippi",
    MT => "Montana",
    NC => "North Carolina",
    ND => "North Dakota",
    NE => "Nebraska",
    NH => "New Hampshire",
    NJ => "New Jersey",
    NM => "New Mexico",
    NV => "Nevada",
    NY => "New York",
    OH => "Ohio",
    OK => "Oklahoma",
    OR => "Oregon",
    PA => "Pennsylvania",
    PR => "Puerto Rico",
    RI => "Rhode Island",
    SC => "South Carolina",
    SD => "South Dakota",
    TN => "Tennessee",
    TT => "Trust Territories",
    TX => "Texas",
    UT => "Utah",
    VA => "Virginia",
    VI => "Virgin Islands",
    VT => "Vermont",
    WA => "Washington",
    WI => "Wisconsin",
    WV => "West Virginia",
    WY => "Wyoming",
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StateCode {
    type Error = UnknownStateCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> String {
        code.as_str().to_string()
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// IFTA member countries. Jurisdictions are US states or Canadian provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CAN")]
    Can,
}

impl Country {
    pub const ALL: [Self; 2] = [Self::Us, Self::Can];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Can => "CAN",
        }
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "CAN" => Ok(Self::Can),
            other => Err(ValidationError::InvalidCountry {
                value: other.to_owned(),
            }),
        }
    }
}

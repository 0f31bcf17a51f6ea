//! Lap number value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A lap number within a race.
///
/// Parsing accepts exactly the strings matched by `^\d+$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LapNumber(u32);

impl LapNumber {
    /// The lap as a number
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for LapNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidLapNumber(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::InvalidLapNumber(s.to_string()))
    }
}

impl fmt::Display for LapNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LapNumber {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LapNumber> for String {
    fn from(lap: LapNumber) -> Self {
        lap.to_string()
    }
}

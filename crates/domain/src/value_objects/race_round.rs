//! Race round value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A round number within a season.
///
/// Parsing accepts exactly the strings matched by `^\d+$`; the value is
/// normalized to its numeric form (leading zeros are dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceRound(u32);

impl RaceRound {
    /// The round as a number
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for RaceRound {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidRaceRound(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::InvalidRaceRound(s.to_string()))
    }
}

impl fmt::Display for RaceRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RaceRound {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RaceRound> for String {
    fn from(round: RaceRound) -> Self {
        round.to_string()
    }
}

//! Season year value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A season selector: either an explicit four-digit year or the rolling
/// `current` token understood by the upstream API.
///
/// Parsing accepts exactly the strings matched by `^\d{4}$|^current$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeasonYear {
    /// The upstream's rolling pointer to the season in progress
    Current,
    /// An explicit four-digit calendar year
    Year(u16),
}

impl SeasonYear {
    /// The numeric year, if this is an explicit year
    #[must_use]
    pub const fn numeric(self) -> Option<i32> {
        match self {
            Self::Current => None,
            Self::Year(y) => Some(y as i32),
        }
    }

    /// Whether this is the rolling `current` token
    #[must_use]
    pub const fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }
}

impl FromStr for SeasonYear {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "current" {
            return Ok(Self::Current);
        }
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            let year = s
                .parse::<u16>()
                .map_err(|_| DomainError::InvalidSeasonYear(s.to_string()))?;
            return Ok(Self::Year(year));
        }
        Err(DomainError::InvalidSeasonYear(s.to_string()))
    }
}

impl fmt::Display for SeasonYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Year(y) => write!(f, "{y}"),
        }
    }
}

impl TryFrom<String> for SeasonYear {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SeasonYear> for String {
    fn from(year: SeasonYear) -> Self {
        year.to_string()
    }
}

//! Championship standings type value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Which championship table a standings request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsKind {
    /// Drivers' championship standings
    #[default]
    Drivers,
    /// Constructors' championship standings
    Constructors,
}

impl StandingsKind {
    /// The upstream path segment for this standings table
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Drivers => "driverStandings",
            Self::Constructors => "constructorStandings",
        }
    }
}

impl FromStr for StandingsKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drivers" => Ok(Self::Drivers),
            "constructors" => Ok(Self::Constructors),
            other => Err(DomainError::InvalidStandingsKind(other.to_string())),
        }
    }
}

impl fmt::Display for StandingsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drivers => write!(f, "drivers"),
            Self::Constructors => write!(f, "constructors"),
        }
    }
}

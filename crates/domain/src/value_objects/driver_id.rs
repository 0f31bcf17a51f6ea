//! Driver identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// An upstream driver identifier such as `hamilton` or `max_verstappen`.
///
/// The upstream schema is opaque; the only local constraint is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriverId(String);

impl DriverId {
    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DriverId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::EmptyIdentifier("driver"));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DriverId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DriverId> for String {
    fn from(id: DriverId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty() {
        let id: DriverId = "hamilton".parse().unwrap();
        assert_eq!(id.as_str(), "hamilton");
    }

    #[test]
    fn rejects_empty() {
        assert!("".parse::<DriverId>().is_err());
    }

    #[test]
    fn preserves_underscores() {
        let id: DriverId = "max_verstappen".parse().unwrap();
        assert_eq!(id.to_string(), "max_verstappen");
    }
}

//! Constructor identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// An upstream constructor identifier such as `ferrari` or `red_bull`.
///
/// The upstream schema is opaque; the only local constraint is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConstructorId(String);

impl ConstructorId {
    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ConstructorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::EmptyIdentifier("constructor"));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ConstructorId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ConstructorId> for String {
    fn from(id: ConstructorId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty() {
        let id: ConstructorId = "ferrari".parse().unwrap();
        assert_eq!(id.as_str(), "ferrari");
    }

    #[test]
    fn rejects_empty() {
        assert!("".parse::<ConstructorId>().is_err());
    }
}

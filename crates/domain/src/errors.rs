//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Season year is neither a four-digit year nor the `current` token
    #[error("Invalid season year: {0}")]
    InvalidSeasonYear(String),

    /// Race round is not a positive integer string
    #[error("Invalid race round: {0}")]
    InvalidRaceRound(String),

    /// Lap number is not a positive integer string
    #[error("Invalid lap number: {0}")]
    InvalidLapNumber(String),

    /// Identifier (driver or constructor) is empty
    #[error("Empty {0} identifier")]
    EmptyIdentifier(&'static str),

    /// Standings type is not a recognized variant
    #[error("Invalid standings type: {0}")]
    InvalidStandingsKind(String),
}

//! Data-volatility classification
//!
//! Maps a request's endpoint shape and resolved year onto a volatility
//! class, which in turn drives the cache TTL. Classification is a pure
//! function of its inputs; the current calendar year is captured once by
//! the caller and passed in, so the class for a given request can change
//! across a year boundary but never within a single call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::ValidatedParams;
use crate::value_objects::SeasonYear;

/// How quickly the data behind a request changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityClass {
    /// Completed seasons; effectively immutable
    Historical,
    /// The season in progress; changes between race weekends
    CurrentSeason,
    /// Lap times and pit stops; may change during a race weekend
    LiveRace,
    /// Anything else, e.g. the year-less seasons listing
    Default,
}

impl fmt::Display for VolatilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Historical => write!(f, "historical"),
            Self::CurrentSeason => write!(f, "current_season"),
            Self::LiveRace => write!(f, "live_race"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Classify a request by endpoint path and resolved parameters.
///
/// The year is taken from the explicit parameter when present, falling back
/// to a four-digit token in the path. The `current` token always classifies
/// as [`VolatilityClass::CurrentSeason`]; a numeric year equal to the
/// current calendar year does too, unless the endpoint is lap-times or
/// pit-stops shaped, which stays [`VolatilityClass::LiveRace`].
#[must_use]
pub fn classify(endpoint: &str, params: &ValidatedParams, current_year: i32) -> VolatilityClass {
    if matches!(params.year, Some(SeasonYear::Current)) || endpoint.contains("/current/") {
        return VolatilityClass::CurrentSeason;
    }

    let year = params
        .year
        .and_then(SeasonYear::numeric)
        .or_else(|| extract_year_from_path(endpoint));

    if year.is_some_and(|y| y < current_year) {
        return VolatilityClass::Historical;
    }

    if is_live_race_path(endpoint) {
        return VolatilityClass::LiveRace;
    }

    if year == Some(current_year) {
        return VolatilityClass::CurrentSeason;
    }

    VolatilityClass::Default
}

/// Whether the endpoint concerns lap times or pit stops
fn is_live_race_path(endpoint: &str) -> bool {
    endpoint.starts_with("/laps/") || endpoint.starts_with("/pitstops/")
}

/// First path segment that is exactly four ASCII digits, parsed as a year
fn extract_year_from_path(endpoint: &str) -> Option<i32> {
    endpoint
        .split('/')
        .find(|segment| segment.len() == 4 && segment.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|segment| segment.parse().ok())
}

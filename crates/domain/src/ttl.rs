//! Cache TTL policy
//!
//! Maps a volatility class to a cache lifetime. Defaults are hardcoded and
//! can be overridden per class through configuration; an override of zero
//! seconds is invalid and falls back to the class default, so misconfiguration
//! can never produce cache-forever or cache-never behavior.

use std::time::Duration;

use crate::freshness::VolatilityClass;

/// Default TTL for completed seasons: 24 hours
pub const DEFAULT_TTL_HISTORICAL_SECS: u64 = 86_400;
/// Default TTL for the season in progress: 1 hour
pub const DEFAULT_TTL_CURRENT_SEASON_SECS: u64 = 3_600;
/// Default TTL for lap times and pit stops: 5 minutes
pub const DEFAULT_TTL_LIVE_RACE_SECS: u64 = 300;
/// Default TTL for unclassified data: 5 minutes
pub const DEFAULT_TTL_DEFAULT_SECS: u64 = 300;

/// Resolved TTL per volatility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    historical: Duration,
    current_season: Duration,
    live_race: Duration,
    fallback: Duration,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            historical: Duration::from_secs(DEFAULT_TTL_HISTORICAL_SECS),
            current_season: Duration::from_secs(DEFAULT_TTL_CURRENT_SEASON_SECS),
            live_race: Duration::from_secs(DEFAULT_TTL_LIVE_RACE_SECS),
            fallback: Duration::from_secs(DEFAULT_TTL_DEFAULT_SECS),
        }
    }
}

impl TtlPolicy {
    /// Build a policy from configured override values in seconds.
    ///
    /// A zero value is treated as invalid configuration and replaced with the
    /// class default.
    #[must_use]
    pub fn from_overrides(
        historical_secs: u64,
        current_season_secs: u64,
        live_race_secs: u64,
        default_secs: u64,
    ) -> Self {
        Self {
            historical: valid_or(historical_secs, DEFAULT_TTL_HISTORICAL_SECS),
            current_season: valid_or(current_season_secs, DEFAULT_TTL_CURRENT_SEASON_SECS),
            live_race: valid_or(live_race_secs, DEFAULT_TTL_LIVE_RACE_SECS),
            fallback: valid_or(default_secs, DEFAULT_TTL_DEFAULT_SECS),
        }
    }

    /// The cache lifetime for a volatility class
    #[must_use]
    pub const fn resolve(&self, class: VolatilityClass) -> Duration {
        match class {
            VolatilityClass::Historical => self.historical,
            VolatilityClass::CurrentSeason => self.current_season,
            VolatilityClass::LiveRace => self.live_race,
            VolatilityClass::Default => self.fallback,
        }
    }
}

const fn valid_or(secs: u64, default: u64) -> Duration {
    if secs == 0 {
        Duration::from_secs(default)
    } else {
        Duration::from_secs(secs)
    }
}

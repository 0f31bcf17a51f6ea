//! Cache configuration with per-volatility-class TTL settings.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::default_true;
use domain::TtlPolicy;

/// Cache configuration
///
/// TTL values are in seconds; `0` marks a setting as invalid and the class
/// falls back to its built-in default when the policy is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// TTL for completed seasons (default: 24 hours)
    #[serde(default = "default_ttl_historical")]
    pub ttl_historical_secs: u64,

    /// TTL for the season in progress (default: 1 hour)
    #[serde(default = "default_ttl_current_season")]
    pub ttl_current_season_secs: u64,

    /// TTL for lap times and pit stops (default: 5 minutes)
    #[serde(default = "default_ttl_live_race")]
    pub ttl_live_race_secs: u64,

    /// TTL for unclassified data (default: 5 minutes)
    #[serde(default = "default_ttl_default")]
    pub ttl_default_secs: u64,

    /// Maximum number of cached responses
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_ttl_historical() -> u64 {
    domain::ttl::DEFAULT_TTL_HISTORICAL_SECS
}

const fn default_ttl_current_season() -> u64 {
    domain::ttl::DEFAULT_TTL_CURRENT_SEASON_SECS
}

const fn default_ttl_live_race() -> u64 {
    domain::ttl::DEFAULT_TTL_LIVE_RACE_SECS
}

const fn default_ttl_default() -> u64 {
    domain::ttl::DEFAULT_TTL_DEFAULT_SECS
}

const fn default_max_entries() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_historical_secs: default_ttl_historical(),
            ttl_current_season_secs: default_ttl_current_season(),
            ttl_live_race_secs: default_ttl_live_race(),
            ttl_default_secs: default_ttl_default(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Build the TTL policy from the configured values.
    ///
    /// Zero-valued TTLs are reported and replaced with class defaults.
    #[must_use]
    pub fn ttl_policy(&self) -> TtlPolicy {
        for (name, secs) in [
            ("ttl_historical_secs", self.ttl_historical_secs),
            ("ttl_current_season_secs", self.ttl_current_season_secs),
            ("ttl_live_race_secs", self.ttl_live_race_secs),
            ("ttl_default_secs", self.ttl_default_secs),
        ] {
            if secs == 0 {
                warn!(setting = name, "Invalid cache TTL of 0s, using class default");
            }
        }

        TtlPolicy::from_overrides(
            self.ttl_historical_secs,
            self.ttl_current_season_secs,
            self.ttl_live_race_secs,
            self.ttl_default_secs,
        )
    }
}

//! Security configuration: per-IP rate limiting.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub rate_limit_enabled: bool,

    /// Rate limit window length in seconds (default: 15 minutes)
    #[serde(default = "default_window")]
    pub rate_limit_window_secs: u64,

    /// Maximum requests per IP within one window (default: 100)
    #[serde(default = "default_max_requests")]
    pub rate_limit_max_requests: u32,
}

const fn default_window() -> u64 {
    15 * 60
}

const fn default_max_requests() -> u32 {
    100
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            rate_limit_enabled: true,
            rate_limit_window_secs: default_window(),
            rate_limit_max_requests: default_max_requests(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_100_per_quarter_hour() {
        let config = SecurityConfig::default();
        assert!(config.rate_limit_enabled);
        assert_eq!(config.rate_limit_window_secs, 900);
        assert_eq!(config.rate_limit_max_requests, 100);
    }
}

//! Gate pass configuration.

use serde::{Deserialize, Serialize};

/// Gate pass issuance and validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassConfig {
    /// Minutes a gate pass stays valid after issuance.
    #[serde(default = "default_validity")]
    pub validity_minutes: u64,
    /// Allowed clock skew in seconds when checking the issuance time.
    #[serde(default = "default_skew")]
    pub clock_skew_seconds: u64,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            validity_minutes: default_validity(),
            clock_skew_seconds: default_skew(),
        }
    }
}

fn default_validity() -> u64 {
    5
}

fn default_skew() -> u64 {
    30
}

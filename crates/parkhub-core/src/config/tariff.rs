//! Parking tariff configuration.

use serde::{Deserialize, Serialize};

/// Parking tariff configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Charge per started hour.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: u64,
    /// Currency code for display purposes.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            currency: default_currency(),
        }
    }
}

fn default_hourly_rate() -> u64 {
    20
}

fn default_currency() -> String {
    "INR".to_string()
}

//! Session lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Session lifecycle configuration.
///
/// The hold window bounds how long a reserved slot is honored before an
/// unconfirmed entry times out; the settlement delay models gate clearance
/// between exit request and final slot release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds a reservation is held pending entry confirmation.
    #[serde(default = "default_hold_window")]
    pub hold_window_seconds: u64,
    /// Seconds between an accepted exit request and final slot release.
    #[serde(default = "default_settlement_delay")]
    pub settlement_delay_seconds: u64,
    /// Minimum occupancy in seconds before an exit is accepted.
    #[serde(default = "default_min_dwell")]
    pub min_dwell_seconds: u64,
    /// Default estimated stay in hours, used for the projected departure.
    #[serde(default = "default_estimated_stay")]
    pub estimated_stay_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hold_window_seconds: default_hold_window(),
            settlement_delay_seconds: default_settlement_delay(),
            min_dwell_seconds: default_min_dwell(),
            estimated_stay_hours: default_estimated_stay(),
        }
    }
}

fn default_hold_window() -> u64 {
    300
}

fn default_settlement_delay() -> u64 {
    10
}

fn default_min_dwell() -> u64 {
    10
}

fn default_estimated_stay() -> u64 {
    8
}

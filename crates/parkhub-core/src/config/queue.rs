//! Waiting queue configuration.

use serde::{Deserialize, Serialize};

/// Waiting queue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Floor for the estimated wait in minutes.
    #[serde(default = "default_min_wait")]
    pub min_wait_minutes: u64,
    /// Estimated additional wait per vehicle already queued, in minutes.
    #[serde(default = "default_per_vehicle_wait")]
    pub per_vehicle_wait_minutes: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            min_wait_minutes: default_min_wait(),
            per_vehicle_wait_minutes: default_per_vehicle_wait(),
        }
    }
}

fn default_min_wait() -> u64 {
    5
}

fn default_per_vehicle_wait() -> u64 {
    15
}

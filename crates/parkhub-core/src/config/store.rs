//! Store seeding and snapshot configuration.

use serde::{Deserialize, Serialize};

/// Store seeding and snapshot configuration.
///
/// The in-memory store is seeded from a JSON file at startup. When no seed
/// file exists a generated sample inventory is used instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON seed file (slots + users).
    #[serde(default = "default_seed_path")]
    pub seed_path: String,
    /// Path the snapshot export is written to.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_path: default_seed_path(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_seed_path() -> String {
    "data/seed.json".to_string()
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

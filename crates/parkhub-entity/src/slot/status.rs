//! Slot status enums.

use serde::{Deserialize, Serialize};

/// Occupancy status of a parking slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Available for allocation.
    Free,
    /// A vehicle is parked in the slot.
    Occupied,
    /// Held for a vehicle pending entry confirmation.
    Reserved,
    /// Withdrawn from the pool for maintenance.
    Maintenance,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotStatus::Free => write!(f, "free"),
            SlotStatus::Occupied => write!(f, "occupied"),
            SlotStatus::Reserved => write!(f, "reserved"),
            SlotStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Physical condition of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceCondition {
    /// In working order.
    Good,
    /// Usable but flagged for inspection.
    NeedsAttention,
    /// Out of service.
    UnderMaintenance,
}

impl Default for MaintenanceCondition {
    fn default() -> Self {
        Self::Good
    }
}

//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{SlotId, UserId, VehicleId};

use crate::vehicle::VehicleClass;
use super::priority::PriorityClass;

/// A registered user with one vehicle on file.
///
/// Identity and authorization fields are owned by the external identity
/// layer and consumed read-only here; the core mutates only the
/// operational statistics (`last_parked`, `total_parking_minutes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Registered vehicle.
    pub vehicle_id: VehicleId,
    /// Class of the registered vehicle.
    pub vehicle_class: VehicleClass,
    /// Home building.
    pub building: String,
    /// Home floor.
    pub floor: i32,
    /// Priority class.
    pub priority: PriorityClass,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the user needs an accessibility-suitable slot.
    pub accessibility_needs: bool,
    /// Preferred slot codes, in preference order.
    #[serde(default)]
    pub preferred_slots: Vec<SlotId>,

    // -- Operational statistics --
    /// When the user last parked.
    pub last_parked: Option<DateTime<Utc>>,
    /// Cumulative parked duration in minutes.
    pub total_parking_minutes: u64,
    /// Number of recorded violations.
    pub violation_count: u32,
}

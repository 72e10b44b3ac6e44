//! Slot entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{SlotId, VehicleId};

use crate::vehicle::VehicleClass;
use super::status::{MaintenanceCondition, SlotStatus};

/// Physical location of a slot within the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Building code (`A`, `B`, ...).
    pub building: String,
    /// Floor number.
    pub floor: i32,
    /// Zone name within the floor.
    pub zone: String,
    /// Section code within the zone.
    pub section: String,
}

/// A single allocatable parking slot.
///
/// The inventory is fixed at startup; slots are only ever mutated through
/// registry status transitions, never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Slot code, e.g. `A1-01`.
    pub id: SlotId,
    /// Vehicle class the slot is built for.
    pub class: VehicleClass,
    /// Current occupancy status.
    pub status: SlotStatus,
    /// Lock flag preventing concurrent reservation.
    pub locked: bool,
    /// Physical location.
    pub location: Location,
    /// Whether the slot is under a roof.
    pub covered: bool,
    /// Whether the slot is suitable for accessibility needs.
    pub accessible: bool,

    // -- Reservation hold --
    /// Vehicle the slot is currently held for or occupied by.
    pub holder: Option<VehicleId>,
    /// When the current reservation hold expires.
    pub reserved_until: Option<DateTime<Utc>>,
    /// When the current occupancy began.
    pub occupied_at: Option<DateTime<Utc>>,

    // -- Usage statistics --
    /// When the slot was last vacated.
    pub last_used: Option<DateTime<Utc>>,
    /// Number of completed occupancies.
    pub usage_count: u64,
    /// Physical condition.
    #[serde(default)]
    pub condition: MaintenanceCondition,
}

impl Slot {
    /// Check whether the slot can be offered to a requester: free,
    /// unlocked, unreserved, and in service.
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Free
            && !self.locked
            && self.holder.is_none()
            && self.condition != MaintenanceCondition::UnderMaintenance
    }

    /// Check whether the slot is held for the given vehicle.
    pub fn is_held_for(&self, vehicle: &VehicleId) -> bool {
        self.status == SlotStatus::Reserved && self.holder.as_ref() == Some(vehicle)
    }
}

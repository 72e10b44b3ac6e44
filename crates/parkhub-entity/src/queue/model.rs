//! Queue entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{QueueEntryId, UserId, VehicleId};

use crate::user::PriorityClass;
use crate::vehicle::VehicleClass;

/// Slot attribute a waiting vehicle would prefer when offered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPreference {
    /// Any slot of the right class.
    Any,
    /// An accessibility-suitable slot.
    Accessible,
    /// A covered slot.
    Covered,
    /// A ground-floor slot.
    GroundFloor,
}

impl Default for SlotPreference {
    fn default() -> Self {
        Self::Any
    }
}

/// One waiting vehicle in the priority queue.
///
/// Created when no slot is available at request time; removed when a slot
/// is offered or the entry is withdrawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Unique entry identifier.
    pub id: QueueEntryId,
    /// The waiting vehicle.
    pub vehicle_id: VehicleId,
    /// The owning user.
    pub user_id: UserId,
    /// Vehicle class a compatible slot must have.
    pub class: VehicleClass,
    /// Priority class governing queue order.
    pub priority: PriorityClass,
    /// When the vehicle was enqueued.
    pub queued_at: DateTime<Utc>,
    /// Estimated wait in minutes, computed at insertion only.
    pub estimated_wait_minutes: u64,
    /// 1-based position, recomputed on every queue mutation.
    pub position: usize,
    /// Whether the user has been notified of an offer.
    pub notified: bool,
    /// Preferred slot attribute.
    #[serde(default)]
    pub slot_preference: SlotPreference,
}

//! Queue-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{SlotId, VehicleId};

/// Events related to the waiting queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QueueEvent {
    /// A vehicle was added to the waiting queue.
    Enqueued {
        /// The vehicle ID.
        vehicle_id: VehicleId,
        /// Assigned 1-based queue position.
        position: usize,
        /// Estimated wait in minutes.
        estimated_wait_minutes: u64,
    },
    /// A freed slot was offered to a waiting vehicle (or no compatible
    /// vehicle was found).
    OfferAttempted {
        /// The vehicle the offer targets, if any entry was compatible.
        vehicle_id: VehicleId,
        /// The offered slot; `None` when the claim raced away.
        offered_slot: Option<SlotId>,
    },
}

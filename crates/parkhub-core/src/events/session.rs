//! Session-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{SessionId, SlotId, VehicleId};

/// Events related to parking sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A slot was reserved pending entry confirmation.
    Reserved {
        /// The session ID.
        session_id: SessionId,
        /// The vehicle the slot is held for.
        vehicle_id: VehicleId,
        /// The reserved slot.
        slot_id: SlotId,
    },
    /// Entry was confirmed and the vehicle occupies its slot.
    Entered {
        /// The session ID.
        session_id: SessionId,
        /// The vehicle ID.
        vehicle_id: VehicleId,
        /// The occupied slot.
        slot_id: SlotId,
    },
    /// A reservation hold elapsed without confirmation.
    TimedOut {
        /// The session ID.
        session_id: SessionId,
        /// The vehicle ID.
        vehicle_id: VehicleId,
        /// The slot released back to the pool.
        slot_id: SlotId,
    },
    /// A session completed and its slot was released.
    Completed {
        /// The session ID.
        session_id: SessionId,
        /// The vehicle ID.
        vehicle_id: VehicleId,
        /// Total parked duration in minutes.
        duration_minutes: u64,
        /// Computed charge.
        charge: u64,
    },
}

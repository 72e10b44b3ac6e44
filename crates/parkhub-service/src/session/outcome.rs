//! Caller-facing results of session operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{SessionId, SlotId, VehicleId};

use parkhub_entity::queue::QueueEntry;
use parkhub_entity::session::Session;
use parkhub_entity::slot::Location;

/// Result of an entry request: either a slot was assigned or the vehicle
/// was queued. Queueing is a routed outcome, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// A slot was reserved; the driver must park and confirm in time.
    Assigned(EntryTicket),
    /// No slot of the required class was free; the vehicle is waiting.
    Queued(QueuedTicket),
}

/// Details of a reserved slot awaiting confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTicket {
    /// The created session.
    pub session_id: SessionId,
    /// The reserved slot.
    pub slot_id: SlotId,
    /// Where the slot is.
    pub location: Location,
    /// One-time verification code to confirm parking with.
    pub code: String,
    /// Seconds the reservation is held.
    pub confirm_within_seconds: u64,
    /// Projected departure time.
    pub estimated_departure: DateTime<Utc>,
}

/// Queue placement details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedTicket {
    /// Assigned 1-based queue position.
    pub position: usize,
    /// Estimated wait in minutes.
    pub estimated_wait_minutes: u64,
}

/// Acknowledgment of a confirmed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmAck {
    /// The session.
    pub session_id: SessionId,
    /// The occupied slot.
    pub slot_id: SlotId,
    /// When entry was confirmed.
    pub entered_at: DateTime<Utc>,
    /// Projected departure time.
    pub estimated_departure: DateTime<Utc>,
}

/// Acknowledgment of an accepted exit request. The slot is released
/// asynchronously once the settlement delay elapses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitAck {
    /// The session.
    pub session_id: SessionId,
    /// When entry was confirmed.
    pub entered_at: DateTime<Utc>,
    /// When exit was requested.
    pub exited_at: DateTime<Utc>,
    /// Parked duration in whole minutes.
    pub duration_minutes: u64,
    /// Human-readable duration, e.g. `2h 5m`.
    pub duration_formatted: String,
    /// Computed charge.
    pub charge: u64,
    /// Currency of the charge.
    pub currency: String,
    /// Seconds until the slot is finally released.
    pub settlement_seconds: u64,
}

/// Current standing of a vehicle, for status queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleStatus {
    /// The queried vehicle.
    pub vehicle_id: VehicleId,
    /// The vehicle's non-terminal session, if any.
    pub session: Option<Session>,
    /// The vehicle's queue entry, if waiting.
    pub queue_entry: Option<QueueEntry>,
}

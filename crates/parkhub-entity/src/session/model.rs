//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{SessionId, SlotId, VehicleId};

use super::status::{EntryMethod, SessionStatus};

/// One vehicle's attempt to occupy a slot, from entry request to exit.
///
/// Sessions are created on entry request and retained after reaching a
/// terminal state as append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// The vehicle this session belongs to.
    pub vehicle_id: VehicleId,
    /// The assigned slot.
    pub slot_id: SlotId,
    /// One-time verification code the driver confirms parking with.
    pub code: String,
    /// Current state machine position.
    pub status: SessionStatus,
    /// How the session was initiated.
    pub entry_method: EntryMethod,
    /// Gate the entry pass was scanned at, if any.
    pub gate_id: Option<String>,

    // -- Timestamps --
    /// When entry was requested.
    pub requested_at: DateTime<Utc>,
    /// When entry was confirmed.
    pub entered_at: Option<DateTime<Utc>>,
    /// When exit was requested.
    pub exited_at: Option<DateTime<Utc>>,
    /// Projected departure time.
    pub estimated_departure: DateTime<Utc>,

    // -- Settlement --
    /// Actual occupancy duration in seconds, recorded at exit request.
    pub duration_seconds: Option<u64>,
    /// Charge computed at exit request.
    pub charge: Option<u64>,
    /// Recorded rule violations.
    #[serde(default)]
    pub violations: Vec<String>,
}

impl Session {
    /// Whether the session still holds the per-vehicle exclusivity
    /// invariant (any non-terminal state).
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Occupancy duration so far, in seconds, measured from entry
    /// confirmation. `None` before entry is confirmed.
    pub fn occupancy_seconds(&self, now: DateTime<Utc>) -> Option<u64> {
        let entered = self.entered_at?;
        Some((now - entered).num_seconds().max(0) as u64)
    }

    /// Billable minutes for the recorded duration (floored, matching the
    /// gate's displayed duration).
    pub fn billable_minutes(&self) -> Option<u64> {
        self.duration_seconds.map(|s| s / 60)
    }
}

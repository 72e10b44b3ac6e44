//! Session state machine enums.

use serde::{Deserialize, Serialize};

/// State of a parking session.
///
/// The lifecycle is `PendingEntry → Entered → PendingExit → Exited`,
/// with `PendingEntry → Timeout` as the alternate terminal branch when a
/// reservation hold elapses unconfirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Slot reserved, waiting for the driver to park and confirm.
    PendingEntry,
    /// Entry confirmed; the vehicle occupies its slot.
    Entered,
    /// Exit requested; waiting out the settlement delay.
    PendingExit,
    /// Completed normally.
    Exited,
    /// Reservation hold elapsed without confirmation.
    Timeout,
}

impl SessionStatus {
    /// Whether the session has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Exited | SessionStatus::Timeout)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::PendingEntry => write!(f, "pending_entry"),
            SessionStatus::Entered => write!(f, "entered"),
            SessionStatus::PendingExit => write!(f, "pending_exit"),
            SessionStatus::Exited => write!(f, "exited"),
            SessionStatus::Timeout => write!(f, "timeout"),
        }
    }
}

/// How the session was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    /// Gate pass scanned at a gate device.
    Qr,
    /// Entered manually by gate staff.
    Manual,
    /// Created directly by operator tooling. Not produced by the gate
    /// flows here; kept so snapshots holding such records still parse.
    Admin,
    /// Offered from the waiting queue.
    Queue,
}

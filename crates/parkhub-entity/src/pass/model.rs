//! Gate pass payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action a gate pass authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateAction {
    /// Request entry into the lot.
    Entry,
    /// Request exit from the lot.
    Exit,
}

impl std::fmt::Display for GateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateAction::Entry => write!(f, "entry"),
            GateAction::Exit => write!(f, "exit"),
        }
    }
}

/// Time-bounded access token presented at a gate.
///
/// The `signature` field is an opaque stub, not a cryptographic MAC;
/// validation checks only shape and freshness. A keyed MAC would slot
/// into issuance and validation without changing this payload shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatePass {
    /// Action the pass authorizes.
    pub action: GateAction,
    /// Gate the pass was issued for.
    pub gate_id: String,
    /// Device that issued the pass.
    pub device_id: String,
    /// When the pass was issued.
    pub issued_at: DateTime<Utc>,
    /// When the pass stops being honored.
    pub valid_until: DateTime<Utc>,
    /// Opaque signature stub.
    pub signature: String,
}

impl GatePass {
    /// Whether the pass has passed its declared expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.valid_until
    }
}

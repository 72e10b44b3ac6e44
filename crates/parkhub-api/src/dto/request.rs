//! Request DTOs.

use serde::{Deserialize, Serialize};

use parkhub_core::types::id::{SlotId, VehicleId};
use parkhub_entity::pass::GateAction;

/// Body of `POST /api/entry/request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Vehicle registration plate.
    pub vehicle_id: VehicleId,
    /// Encoded entry pass, when scanned at a gate. Absent for manual
    /// entry by gate staff.
    #[serde(default)]
    pub pass: Option<String>,
}

/// Body of `POST /api/entry/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// Vehicle registration plate.
    pub vehicle_id: VehicleId,
    /// The slot the driver parked in.
    pub slot_id: SlotId,
    /// One-time verification code from the entry ticket.
    pub code: String,
}

/// Body of `POST /api/exit/request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitRequest {
    /// Vehicle registration plate.
    pub vehicle_id: VehicleId,
    /// Encoded exit pass, when scanned at a gate.
    #[serde(default)]
    pub pass: Option<String>,
    /// Verification code from the entry ticket.
    pub code: String,
}

/// Body of `POST /api/passes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRequest {
    /// Action the pass should authorize.
    pub action: GateAction,
    /// Gate the pass is issued for.
    pub gate_id: String,
}

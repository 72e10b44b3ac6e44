//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_entity::pass::GateAction;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Issued gate pass, encoded for transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassResponse {
    /// Encoded pass to present at entry or exit.
    pub pass: String,
    /// Action the pass authorizes.
    pub action: GateAction,
    /// Gate the pass is issued for.
    pub gate_id: String,
    /// When the pass was issued.
    pub issued_at: DateTime<Utc>,
    /// When the pass stops being honored.
    pub valid_until: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

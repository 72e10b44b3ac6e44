//! Gate pass issuance handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::request::PassRequest;
use crate::dto::response::{ApiResponse, PassResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/passes
///
/// Issues a short-lived pass for the requested gate and action, encoded
/// for display as a QR payload.
pub async fn issue_pass(
    State(state): State<AppState>,
    Json(body): Json<PassRequest>,
) -> ApiResult<Json<ApiResponse<PassResponse>>> {
    let now = Utc::now();
    let pass = state.manager.passes().issue(body.action, &body.gate_id, now);
    let encoded = state.manager.passes().encode(&pass)?;
    Ok(Json(ApiResponse::ok(PassResponse {
        pass: encoded,
        action: pass.action,
        gate_id: pass.gate_id,
        issued_at: pass.issued_at,
        valid_until: pass.valid_until,
    })))
}

//! Entry flow handlers.

use axum::Json;
use axum::extract::State;

use parkhub_service::session::{ConfirmAck, EntryOutcome};

use crate::dto::request::{ConfirmRequest, EntryRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/entry/request
///
/// Returns either an assigned slot with a confirmation window or a
/// queue placement.
pub async fn request_entry(
    State(state): State<AppState>,
    Json(body): Json<EntryRequest>,
) -> ApiResult<Json<ApiResponse<EntryOutcome>>> {
    let outcome = state
        .manager
        .request_entry(&body.vehicle_id, body.pass.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// POST /api/entry/confirm
pub async fn confirm_entry(
    State(state): State<AppState>,
    Json(body): Json<ConfirmRequest>,
) -> ApiResult<Json<ApiResponse<ConfirmAck>>> {
    let ack = state
        .manager
        .confirm_entry(&body.vehicle_id, &body.slot_id, &body.code)
        .await?;
    Ok(Json(ApiResponse::ok(ack)))
}

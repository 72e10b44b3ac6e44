//! Exit flow handlers.

use axum::Json;
use axum::extract::State;

use parkhub_service::session::ExitAck;

use crate::dto::request::ExitRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/exit/request
///
/// Accepts the exit, returns the charge breakdown, and schedules the
/// slot release after the settlement delay.
pub async fn request_exit(
    State(state): State<AppState>,
    Json(body): Json<ExitRequest>,
) -> ApiResult<Json<ApiResponse<ExitAck>>> {
    let ack = state
        .manager
        .request_exit(&body.vehicle_id, body.pass.as_deref(), &body.code)
        .await?;
    Ok(Json(ApiResponse::ok(ack)))
}

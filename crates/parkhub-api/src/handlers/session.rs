//! Session query and administration handlers.

use axum::Json;
use axum::extract::{Path, State};

use parkhub_core::types::id::{SessionId, VehicleId};
use parkhub_entity::session::Session;
use parkhub_service::session::VehicleStatus;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> ApiResult<Json<ApiResponse<Session>>> {
    let session = state.manager.session(&id).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/sessions/{id}/force-complete
///
/// Operator override: settle a pending exit immediately or time out a
/// pending entry.
pub async fn force_complete(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> ApiResult<Json<ApiResponse<Session>>> {
    let session = state.manager.force_complete(id).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// GET /api/status/{vehicle_id}
pub async fn vehicle_status(
    State(state): State<AppState>,
    Path(vehicle_id): Path<VehicleId>,
) -> Json<ApiResponse<VehicleStatus>> {
    let status = state.manager.vehicle_status(&vehicle_id).await;
    Json(ApiResponse::ok(status))
}

//! Slot listing handlers.

use axum::Json;
use axum::extract::{Query, State};

use parkhub_entity::slot::{Slot, SlotFilter};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/slots
///
/// Lists slots, optionally filtered by `class`, `status`, `building`,
/// and `accessible`.
pub async fn list_slots(
    State(state): State<AppState>,
    Query(filter): Query<SlotFilter>,
) -> Json<ApiResponse<Vec<Slot>>> {
    Json(ApiResponse::ok(state.manager.list_slots(&filter)))
}

//! Queue listing handlers.

use axum::Json;
use axum::extract::State;

use parkhub_entity::queue::QueueEntry;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/queue
pub async fn list_queue(State(state): State<AppState>) -> Json<ApiResponse<Vec<QueueEntry>>> {
    Json(ApiResponse::ok(state.manager.queue_snapshot().await))
}

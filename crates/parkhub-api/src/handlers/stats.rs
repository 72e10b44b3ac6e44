//! Site statistics handlers.

use axum::Json;
use axum::extract::State;

use parkhub_service::stats::SiteStatistics;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn site_statistics(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<SiteStatistics>>> {
    let stats = state.manager.statistics().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

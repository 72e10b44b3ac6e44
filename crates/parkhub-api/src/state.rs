//! Application state shared across all handlers.

use std::sync::Arc;

use parkhub_core::config::AppConfig;
use parkhub_service::SessionManager;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The session manager coordinating the whole site.
    pub manager: Arc<SessionManager>,
}

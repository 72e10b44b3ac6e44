//! Route definitions for the ParkHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(gate_routes())
        .merge(session_routes())
        .merge(site_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Gate-facing flow: passes, entry, exit.
fn gate_routes() -> Router<AppState> {
    Router::new()
        .route("/passes", post(handlers::passes::issue_pass))
        .route("/entry/request", post(handlers::entry::request_entry))
        .route("/entry/confirm", post(handlers::entry::confirm_entry))
        .route("/exit/request", post(handlers::exit::request_exit))
}

/// Session queries and operator overrides.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/{id}", get(handlers::session::get_session))
        .route(
            "/sessions/{id}/force-complete",
            post(handlers::session::force_complete),
        )
        .route(
            "/status/{vehicle_id}",
            get(handlers::session::vehicle_status),
        )
}

/// Site-wide listings.
fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/slots", get(handlers::slots::list_slots))
        .route("/queue", get(handlers::queue::list_queue))
        .route("/stats", get(handlers::stats::site_statistics))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

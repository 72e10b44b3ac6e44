//! # parkhub-api
//!
//! HTTP API layer for ParkHub built on Axum.
//!
//! Provides the gate-facing REST endpoints (entry, exit, passes), status
//! and listing queries, middleware (CORS, request tracing), DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

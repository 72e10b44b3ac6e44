//! Application builder — wires router + middleware + state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;

use parkhub_core::config::AppConfig;
use parkhub_core::error::AppError;
use parkhub_service::{SessionManager, TracingNotifier};
use parkhub_store::{SessionStore, SlotStore, UserStore, apply_seed, export_snapshot, load_seed, sample_inventory};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the ParkHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ParkHub server...");

    let slots = Arc::new(SlotStore::new());
    let sessions = Arc::new(SessionStore::new());
    let users = Arc::new(UserStore::new());

    let seed = match load_seed(&config.store.seed_path).await? {
        Some(seed) => seed,
        None => {
            tracing::info!(
                path = %config.store.seed_path,
                "No seed file, using generated sample inventory"
            );
            sample_inventory()
        }
    };
    apply_seed(&seed, &slots, &users).await?;
    tracing::info!(
        slots = seed.slots.len(),
        users = seed.users.len(),
        "Store seeded"
    );

    let manager = SessionManager::new(
        &config,
        Arc::clone(&slots),
        Arc::clone(&sessions),
        Arc::clone(&users),
        Arc::new(TracingNotifier::new()),
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        manager,
    };
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ParkHub server listening on {addr}");

    // Drain open connections for at most the configured grace period
    // after the shutdown signal, then abort whatever is left.
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let signalled = Arc::new(Notify::new());
    let notify = Arc::clone(&signalled);
    let server = std::future::IntoFuture::into_future(
        axum::serve(listener, app).with_graceful_shutdown(async move {
            shutdown_signal().await;
            notify.notify_one();
        }),
    );
    tokio::pin!(server);
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            signalled.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.server.shutdown_grace_seconds,
                "Shutdown grace period elapsed, dropping open connections"
            );
        }
    }

    tracing::info!("Shutting down, writing store snapshot");
    export_snapshot(&config.store.snapshot_path, &slots, &users, &sessions).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
    }
}

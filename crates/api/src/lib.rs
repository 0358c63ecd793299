//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/cohorts
//!   POST   /api/cohorts
//!   GET    /api/cohorts/{id}
//!   PUT    /api/cohorts/{id}
//!   DELETE /api/cohorts/{id}
//!   GET    /api/cohorts/{id}/students
//!   GET    /api/students
//!   POST   /api/students
//!   GET    /api/students/{id}
//!   PUT    /api/students/{id}
//!   DELETE /api/students/{id}

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use db::DbPool;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::{ApiError, ApiResult};
pub use handlers::AppState;

use handlers::{cohorts, students};

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/cohorts", get(cohorts::list).post(cohorts::create))
        .route(
            "/cohorts/{id}",
            get(cohorts::get).put(cohorts::update).delete(cohorts::delete),
        )
        .route("/cohorts/{id}/students", get(cohorts::students))
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/{id}",
            get(students::get).put(students::update).delete(students::delete),
        );

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve the API until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState::new(pool));
    let listener = TcpListener::bind(addr).await?;
    info!("API running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, shutting down...");
        }
    }
}

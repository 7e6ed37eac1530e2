//! Axum server setup
//!
//! Server skeleton with:
//! - Schema check on startup
//! - Tracing and timeout middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::flash::FlashSigner;
use super::routes;
use crate::db::{create_pool, ensure_schema, DbError};
use crate::Settings;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub settings: Settings,
    pub flash: FlashSigner,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: Settings) -> Self {
        let flash = FlashSigner::new(&settings.secret_key);
        Self {
            pool,
            settings,
            flash,
        }
    }

    /// Open the pool for `settings.database` and make sure the table exists.
    pub async fn connect(settings: Settings) -> Result<Self, ServerError> {
        let pool = create_pool(&settings).await.map_err(DbError::from)?;
        ensure_schema(&pool).await?;
        Ok(Self::new(pool, settings))
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(timeout_layer(Duration::from_secs(
            state.settings.request_timeout_secs,
        )));

    Router::new()
        .merge(routes::entries::router())
        .merge(routes::health::router())
        .layer(middleware)
        .with_state(Arc::new(state))
}

/// Requests exceeding `timeout` are answered with 408 Request Timeout.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let settings = Settings::from_file(Path::new("microblog.toml"))?;
/// run_server(settings).await?;
/// ```
pub async fn run_server(settings: Settings) -> Result<(), ServerError> {
    if settings.uses_default_secret() && !settings.debug {
        tracing::warn!("secret_key is the built-in development key; set one in the settings file");
    }

    let bind_addr = settings.bind_addr;
    tracing::info!(database = %settings.database.display(), debug = settings.debug, "Opening database");
    let state = AppState::connect(settings).await?;
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}

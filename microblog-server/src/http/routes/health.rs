//! Health check endpoint

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::RequestDb;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - verifies a request connection can run a query
async fn health(mut db: RequestDb) -> Result<Json<HealthResponse>, ApiError> {
    let conn = db.acquire().await?;
    sqlx::query("SELECT 1")
        .execute(conn)
        .await
        .map_err(|e| ApiError::Database(e.into()))?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

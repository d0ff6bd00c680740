pub mod analysis;
pub mod index;

use axum::{http::StatusCode, response::IntoResponse};

/// Health check endpoint for container health monitoring
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

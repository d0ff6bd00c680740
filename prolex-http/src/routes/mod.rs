use crate::handlers;
use crate::models::{AnalyzeRequest, ErrorResponse, TokenView};
use crate::server::AppState;
use axum::{
    Json, Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analysis::analyze),
    components(schemas(AnalyzeRequest, TokenView, ErrorResponse))
)]
pub struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::index::index).post(handlers::analysis::analyze),
        )
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi))
        .nest("/api/v1", api_v1_router())
}

/// Create the v1 API router with state
fn api_v1_router() -> Router<AppState> {
    Router::new().route("/analyze", post(handlers::analysis::analyze))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

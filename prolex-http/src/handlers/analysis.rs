use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use tracing::debug;

use crate::{
    error::AppError,
    models::{AnalyzeRequest, ErrorResponse, TokenView},
    server::AppState,
};

/// Analyze Prolog source into lexical tokens
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Source analyzed successfully", body = Vec<TokenView>),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Unterminated string literal", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Vec<TokenView>>, AppError> {
    let Json(payload) = payload?;

    let tokens = state.analyzer.analyze(&payload.code)?;
    debug!("returning {} tokens", tokens.len());

    Ok(Json(tokens.into_iter().map(TokenView::from).collect()))
}

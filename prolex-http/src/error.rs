//! Error handling for prolex-http
//!
//! Maps analysis failures and request rejections onto JSON error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prolex_core::TokenizerError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The source text failed the structural check
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    /// The request body could not be read as an analysis request
    #[error("{0}")]
    BadRequest(String),

    /// The request body exceeded the configured limit
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        &self.status() == status_code
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Tokenizer(TokenizerError::UnterminatedString { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Tokenizer(TokenizerError::InvalidPattern { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn body(&self) -> ErrorResponse {
        let line = match self {
            Self::Tokenizer(err) => err.line(),
            _ => None,
        };
        ErrorResponse {
            error: self.to_string(),
            line,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

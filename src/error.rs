use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::quote::Unavailable;

/// Failures of the cost estimators themselves. Missing coordinates are not
/// listed here: they yield an unavailable estimate instead.
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("invalid listing: {0}")]
    InvalidListing(String),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("cost is not computable: {0}")]
    Unavailable(Unavailable),

    #[error("payment proof url is required")]
    MissingProof,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Unavailable(_) => AppError::Unprocessable(err.to_string()),
            QuoteError::InvalidListing(_)
            | QuoteError::InvalidQuantity(_)
            | QuoteError::MissingProof => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use market_pricing::PricingError;
use market_store::StoreError;

/// Errors surfaced by the API handlers.
///
/// Pricing domain errors are client errors (the stored or submitted inputs
/// are outside the formula's domain); store failures are server errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON body returned for every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Pricing(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_failure"),
        };

        let body = ErrorBody {
            error: error.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use crate::coffee_actor::CatalogError;
use crate::order_actor::OrderError;

/// Failures as the HTTP client sees them. The display text is the `error`
/// field of the response body.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Invalid quantity, must be greater than 0")]
    InvalidQuantity,
    #[error("Coffee not found")]
    CoffeeNotFound,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest | ApiError::InvalidQuantity => StatusCode::BAD_REQUEST,
            ApiError::CoffeeNotFound | ApiError::OrderNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "Request failed inside the service");
        }
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::CoffeeNotFound,
            CatalogError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::OrderNotFound,
            OrderError::InvalidArgument(_) => ApiError::InvalidQuantity,
            OrderError::CoffeeNotFound(_) => ApiError::CoffeeNotFound,
            OrderError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

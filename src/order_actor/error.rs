use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Coffee not found: {0}")]
    CoffeeNotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

use axum::{body::Bytes, extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::warn;
use crate::api::{ApiError, AppState};
use crate::domain::Order;

/// Body of `POST /orders`. Missing fields, or a `null` body, default to
/// empty / zero and are then rejected by validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub coffee_id: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Parses the body as JSON regardless of the declared content type.
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let request: CreateOrderRequest = serde_json::from_slice::<Option<CreateOrderRequest>>(&body)
        .map_err(|e| {
            warn!(error = %e, "Rejected order body");
            ApiError::InvalidRequest
        })?
        .unwrap_or_default();

    let order = state.orders.create_order(request.coffee_id, request.quantity).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order(
    Path(order_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get_order(order_id).await?))
}

//! HTTP routes.
//!
//! - `GET  /`: welcome text
//! - `GET  /coffees`: full catalog
//! - `GET  /coffees/{id}`: one coffee
//! - `GET  /coffees/search?name=&type=`: filtered catalog
//! - `POST /orders`: place an order
//! - `GET  /orders/{order_id}`: look up an order

mod coffees;
mod error;
mod logging;
mod orders;

use axum::{middleware, routing::{get, post}, Router};
use crate::clients::{CoffeeClient, OrderClient};

pub use error::ApiError;

/// Store handles shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub coffees: CoffeeClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/coffees", get(coffees::list_coffees))
        .route("/coffees/search", get(coffees::search_coffees))
        .route("/coffees/{id}", get(coffees::get_coffee))
        .route("/orders", post(orders::create_order))
        .route("/orders/{order_id}", get(orders::get_order))
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(state)
}

async fn welcome() -> &'static str {
    "welcome!"
}

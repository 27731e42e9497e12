//! Typed handles over the generic store clients.

#[macro_use]
mod macros;

mod coffee_client;
mod order_client;

pub use coffee_client::CoffeeClient;
pub use order_client::{Clock, OrderClient};

use std::sync::Arc;
use chrono::{DateTime, FixedOffset, Local};
use tracing::{error, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::clients::CoffeeClient;
use crate::coffee_actor::CatalogError;
use crate::domain::{Order, OrderCreate};
use crate::order_actor::OrderError;

/// Source of the `created_at` timestamp for new orders.
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Client for interacting with the Order ledger actor.
///
/// This client handles the orchestration, validating the quantity and the
/// coffee before recording an order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    coffee_client: CoffeeClient,
    clock: Clock,
}

impl OrderClient {
    /// Uses the local wall clock for order timestamps.
    pub fn new(inner: ResourceClient<Order>, coffee_client: CoffeeClient) -> Self {
        Self::with_clock(inner, coffee_client, Arc::new(|| Local::now().fixed_offset()))
    }

    pub fn with_clock(inner: ResourceClient<Order>, coffee_client: CoffeeClient, clock: Clock) -> Self {
        Self {
            inner,
            coffee_client,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, coffee_id: String, quantity: i64) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate quantity
        if quantity <= 0 {
            error!("Quantity must be positive");
            return Err(OrderError::InvalidArgument(format!("quantity must be greater than 0, got {quantity}")));
        }
        // Positive from here on, so the widening is exact.
        let quantity = quantity.unsigned_abs();

        // Step 2: Validate coffee
        match self.coffee_client.get_coffee(coffee_id.clone()).await {
            Ok(coffee) => info!(coffee_name = %coffee.name, "Coffee validation successful"),
            Err(CatalogError::NotFound(id)) => {
                error!("Coffee not found");
                return Err(OrderError::CoffeeNotFound(id));
            }
            Err(e) => {
                error!(error = %e, "Coffee validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        }

        // Step 3: Record order in the ledger
        let payload = OrderCreate {
            coffee_id,
            quantity,
            created_at: (self.clock)(),
        };
        let order = self.inner.create(payload).await.map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        info!(order_id = %order.order_id, "Order created successfully");
        Ok(order)
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);

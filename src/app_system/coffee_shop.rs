use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;
use crate::actor_framework::{FrameworkError, ResourceActor};
use crate::clients::{CoffeeClient, OrderClient};
use crate::domain::{Coffee, Order};

/// The main application system that owns the store actors.
///
/// Responsible for starting the catalog and ledger actors, wiring the
/// clients together, and waiting for the actors on shutdown.
pub struct CoffeeShop {
    pub coffee_client: CoffeeClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl CoffeeShop {
    /// Spawns both actors. Must be called inside a tokio runtime.
    pub fn start(coffees: Vec<Coffee>, orders: Vec<Order>, buffer_size: usize) -> Result<Self, FrameworkError> {
        // 1. Catalog: seeded once, read-only afterwards
        let (coffee_actor, coffee_resource_client) = ResourceActor::<Coffee>::new(buffer_size);
        let coffee_actor = coffee_actor.seed(coffees)?;

        // 2. Ledger: preloaded history plus UUID ids for new orders
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer_size);
        let order_actor = order_actor
            .seed(orders)?
            .with_id_generator(|| Uuid::new_v4().to_string());

        let coffee_handle = tokio::spawn(coffee_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        let coffee_client = CoffeeClient::new(coffee_resource_client);
        let order_client = OrderClient::new(order_resource_client, coffee_client.clone());

        info!("Coffee shop actors started");
        Ok(Self {
            coffee_client,
            order_client,
            handles: vec![coffee_handle, order_handle],
        })
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every clone of their client is gone, so any handle
    /// still held elsewhere (e.g. by a router) must be dropped first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.coffee_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

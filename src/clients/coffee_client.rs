use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::coffee_actor::CatalogError;
use crate::domain::{Coffee, CoffeeQuery};

/// Client for the read-only catalog actor.
#[derive(Clone)]
pub struct CoffeeClient {
    inner: ResourceClient<Coffee>,
}

impl_basic_client!(CoffeeClient, Coffee, CatalogError, coffee);

impl CoffeeClient {
    /// Every coffee, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_coffees(&self) -> Result<Vec<Coffee>, CatalogError> {
        debug!("Sending request");
        self.inner.list(None).await.map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn search_coffees(&self, query: CoffeeQuery) -> Result<Vec<Coffee>, CatalogError> {
        debug!("Sending request");
        self.inner.list(Some(query)).await.map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}

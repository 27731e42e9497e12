use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Query = (); // The ledger is never searched

    fn id(&self) -> &String { &self.order_id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the order
    /// * `params` - Coffee, quantity and the moment the order was placed
    ///
    /// # Notes
    /// The order is initialized with status `Pending`.
    fn from_create(id: String, params: OrderCreate) -> Result<Self, String> {
        Ok(Order::new(id, params.coffee_id, params.quantity, params.created_at))
    }

    /// Last guard before the ledger append. Quantity is normally validated
    /// by the client; a zero here means that step was skipped.
    fn on_create(&mut self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("quantity must be greater than 0".to_string());
        }
        Ok(())
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }
}

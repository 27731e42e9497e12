use std::convert::Infallible;
use crate::actor_framework::Entity;
use crate::domain::{Coffee, CoffeeQuery};

impl Entity for Coffee {
    type Id = String;
    type CreatePayload = Infallible;
    type Query = CoffeeQuery;

    fn id(&self) -> &String { &self.id }

    /// Coffees only enter the store through seeding.
    fn from_create(_id: String, payload: Infallible) -> Result<Self, String> {
        match payload {}
    }

    fn matches(&self, query: &CoffeeQuery) -> bool {
        query.matches(self)
    }
}

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};

/// A purchasable item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub description: String,
}

impl Coffee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            description: description.into(),
        }
    }
}

/// Whole amounts go out as JSON integers (`60`), everything else as a float.
fn serialize_price<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract().is_zero() {
        if let Some(whole) = price.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match price.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(S::Error::custom(format!("price {price} is not representable"))),
    }
}

/// Catalog search filters. An empty filter matches every coffee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoffeeQuery {
    /// Case-insensitive substring of the name.
    pub name: String,
    /// Case-insensitive exact category.
    pub category: String,
}

impl CoffeeQuery {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, coffee: &Coffee) -> bool {
        let name_matches = self.name.is_empty()
            || coffee.name.to_lowercase().contains(&self.name.to_lowercase());
        let category_matches = self.category.is_empty()
            || coffee.category.to_lowercase() == self.category.to_lowercase();
        name_matches && category_matches
    }
}

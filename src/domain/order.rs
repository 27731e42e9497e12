use chrono::{DateTime, FixedOffset, SubsecRound, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes between placing an order and its promised delivery.
pub const DELIVERY_WINDOW_MINUTES: i64 = 10;

/// Lifecycle state of an order. Creation always yields `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub coffee_id: String,
    pub quantity: u64,
    #[serde(with = "rfc3339_seconds")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(with = "rfc3339_seconds")]
    pub estimated_delivery: DateTime<FixedOffset>,
    pub status: OrderStatus,
}

/// Payload for recording a new order. The ledger assigns the id.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub coffee_id: String,
    pub quantity: u64,
    pub created_at: DateTime<FixedOffset>,
}

impl Order {
    /// Builds a `Pending` order whose delivery is due one window after
    /// `created_at`. Sub-second precision is dropped so the stored value
    /// equals its serialized form.
    pub fn new(
        order_id: impl Into<String>,
        coffee_id: impl Into<String>,
        quantity: u64,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        let created_at = created_at.trunc_subsecs(0);
        Self {
            order_id: order_id.into(),
            coffee_id: coffee_id.into(),
            quantity,
            created_at,
            estimated_delivery: created_at + TimeDelta::minutes(DELIVERY_WINDOW_MINUTES),
            status: OrderStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// RFC 3339 with whole seconds, e.g. `2025-03-03T15:30:45+07:00`.
mod rfc3339_seconds {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(D::Error::custom)
    }
}

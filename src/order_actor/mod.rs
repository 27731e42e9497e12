//! Order ledger entity wiring.

pub mod entity;
pub mod error;

pub use error::*;

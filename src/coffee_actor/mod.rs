//! Catalog entity wiring. The catalog is seeded at startup and never grows.

pub mod entity;
pub mod error;

pub use error::*;

//! System orchestration, startup, and shutdown logic.

pub mod coffee_shop;
pub mod seed;
pub mod telemetry;

pub use coffee_shop::*;
pub use seed::*;
pub use telemetry::*;

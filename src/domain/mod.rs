pub mod coffee;
pub mod order;

pub use coffee::*;
pub use order::*;

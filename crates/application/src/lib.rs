//! Application layer - Use cases and orchestration
//!
//! Contains the conversation state machine, the per-user session store, and
//! the port definitions implemented by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

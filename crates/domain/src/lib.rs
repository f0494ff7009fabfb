//! Domain layer for the trip schedule bot
//!
//! Contains the trip data model, per-user session state, and the typed
//! vocabulary of bot commands. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::{
    BotCommand, FilterField, SortField, TripFilter, export_format_label, parse_export_format,
};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

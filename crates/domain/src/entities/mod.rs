//! Domain entities - Objects with identity and lifecycle

mod session;
mod trip;
mod trip_collection;

pub use session::Session;
pub use trip::{CSV_SEPARATORS, TRIP_FIELD_COUNT, Trip, TripField, TripRecord, split_csv_row};
pub use trip_collection::{PREVIEW_LIMIT, TripCollection};

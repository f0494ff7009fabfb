//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod trip_codec_port;
mod trip_file_store;

#[cfg(test)]
pub use trip_codec_port::MockTripCodecPort;
pub use trip_codec_port::{TripCodecPort, TripCodecs};
#[cfg(test)]
pub use trip_file_store::MockTripFileStore;
pub use trip_file_store::TripFileStore;

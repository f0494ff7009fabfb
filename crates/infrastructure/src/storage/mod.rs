//! File persistence for per-user trip files

mod error;
mod fs_trip_file_store;

pub use error::map_io_error;
pub use fs_trip_file_store::FsTripFileStore;

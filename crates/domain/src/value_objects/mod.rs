//! Value Objects - Immutable, identity-less domain primitives

mod clock_time;
mod conversation_state;
mod data_format;
mod trip_id;
mod user_id;

pub use clock_time::ClockTime;
pub use conversation_state::ConversationState;
pub use data_format::DataFormat;
pub use trip_id::TripId;
pub use user_id::{MAX_USER_ID_LEN, UserId};

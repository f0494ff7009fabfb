//! Per-user session entity

use serde::{Deserialize, Serialize};

use super::trip_collection::TripCollection;
use crate::value_objects::{ConversationState, DataFormat};

/// Everything the bot remembers about one user
///
/// A collection is "open" only when both the trips and the format they were
/// loaded from are known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    collection: Option<TripCollection>,
    open_format: Option<DataFormat>,
    state: ConversationState,
}

impl Session {
    /// Create an empty session in the default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a collection is loaded and marked open
    pub const fn is_open(&self) -> bool {
        self.collection.is_some() && self.open_format.is_some()
    }

    /// Replace the loaded collection and record the format it came from
    ///
    /// Also returns the conversation to its default state.
    pub fn open(&mut self, collection: TripCollection, format: DataFormat) {
        self.collection = Some(collection);
        self.open_format = Some(format);
        self.state = ConversationState::Default;
    }

    /// Forget the collection and reset the conversation
    pub fn reset(&mut self) {
        self.collection = None;
        self.open_format = None;
        self.state = ConversationState::Default;
    }

    pub const fn collection(&self) -> Option<&TripCollection> {
        self.collection.as_ref()
    }

    pub fn collection_mut(&mut self) -> Option<&mut TripCollection> {
        self.collection.as_mut()
    }

    /// Swap in a new collection, keeping the open format
    pub fn replace_collection(&mut self, collection: TripCollection) {
        self.collection = Some(collection);
    }

    pub const fn open_format(&self) -> Option<DataFormat> {
        self.open_format
    }

    pub const fn state(&self) -> ConversationState {
        self.state
    }

    pub fn set_state(&mut self, state: ConversationState) {
        self.state = state;
    }
}

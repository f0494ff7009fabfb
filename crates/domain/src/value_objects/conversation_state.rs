//! Conversation state of a single user

use serde::{Deserialize, Serialize};

/// Which multi-step command a user is mid-way through
///
/// The machine has no terminal state: every reply eventually brings the user
/// back to [`ConversationState::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Waiting for a top-level command
    #[default]
    Default,
    /// Waiting for the field to filter by
    AwaitingFilterField,
    /// Waiting for a departure station value
    AwaitingFilterValueStart,
    /// Waiting for an arrival station value
    AwaitingFilterValueEnd,
    /// Waiting for `start&end` station values
    AwaitingFilterValueBoth,
    /// Waiting for the field to sort by
    AwaitingSortField,
    /// Waiting for the export format
    AwaitingExportFormat,
}

impl ConversationState {
    /// Whether the user is in the middle of a multi-step command
    pub const fn is_awaiting(&self) -> bool {
        !matches!(self, Self::Default)
    }
}

//! Application services - Use case implementations

mod conversation_service;
pub mod messages;
mod reply;
mod session_store;

pub use conversation_service::ConversationService;
pub use reply::{BotReply, ExportDocument, ReplyKeyboard};
pub use session_store::{SessionGuard, SessionHandle, SessionStore};

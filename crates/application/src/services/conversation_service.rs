//! Conversation service - the per-user dialogue state machine
//!
//! Maps `(current state, user input)` to a reply and the next state. Every
//! path ends in a reply; failures are rendered as text and the state returns
//! to [`ConversationState::Default`] so a user can never get stuck.

use std::sync::Arc;

use domain::{
    BotCommand, ConversationState, FilterField, Session, SortField, TripFilter, UserId,
    parse_export_format,
};
use tracing::{error, info, instrument, warn};

use crate::error::ApplicationError;
use crate::services::messages;
use crate::services::reply::{BotReply, ReplyKeyboard};
use crate::services::session_store::SessionStore;

/// Service answering text messages and file uploads
#[derive(Debug, Clone)]
pub struct ConversationService {
    sessions: Arc<SessionStore>,
}

impl ConversationService {
    /// Create a new conversation service
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// The underlying session store
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Answer a text message
    #[instrument(skip(self, text), fields(user = %user))]
    pub async fn handle_text(&self, user: &UserId, text: &str) -> BotReply {
        let mut session = self.sessions.lock(user).await;
        let state = session.state();
        info!(state = ?state, text = %text, "Received message");

        let result = match state {
            ConversationState::Default => {
                self.handle_command(user, &mut session, BotCommand::parse(text))
                    .await
            },
            ConversationState::AwaitingFilterField => Ok(choose_filter_field(&mut session, text)),
            ConversationState::AwaitingFilterValueStart => {
                apply_filter(&mut session, FilterField::StationStart, text)
            },
            ConversationState::AwaitingFilterValueEnd => {
                apply_filter(&mut session, FilterField::StationEnd, text)
            },
            ConversationState::AwaitingFilterValueBoth => {
                apply_filter(&mut session, FilterField::Both, text)
            },
            ConversationState::AwaitingSortField => apply_sort(&mut session, text),
            ConversationState::AwaitingExportFormat => self.export(user, &mut session, text).await,
        };

        result.unwrap_or_else(|e| {
            warn!(error = %e, "Request failed");
            session.set_state(ConversationState::Default);
            BotReply::text(messages::error(&e)).with_keyboard(menu_for(&session))
        })
    }

    /// Answer a file upload
    ///
    /// Rejected while a collection is open; the user must close it with
    /// `/openfile` first.
    #[instrument(skip(self, bytes), fields(user = %user, size = bytes.len()))]
    pub async fn handle_upload(&self, user: &UserId, file_name: &str, bytes: &[u8]) -> BotReply {
        let mut session = self.sessions.lock(user).await;

        if self.sessions.open_or_load(user, &mut session).await {
            info!("Upload rejected, a file is already open");
            return BotReply::text(messages::ALREADY_OPEN).with_keyboard(ReplyKeyboard::main_menu());
        }

        match self
            .sessions
            .accept_upload(user, &mut session, file_name, bytes)
            .await
        {
            Ok(count) => {
                info!(file_name = %file_name, trips = count, "File was loaded");
                BotReply::text(messages::FILE_LOADED).with_keyboard(ReplyKeyboard::main_menu())
            },
            Err(e) => {
                warn!(file_name = %file_name, error = %e, "Upload rejected");
                BotReply::text(messages::error(&e)).with_keyboard(ReplyKeyboard::open_menu())
            },
        }
    }

    async fn handle_command(
        &self,
        user: &UserId,
        session: &mut Session,
        command: BotCommand,
    ) -> Result<BotReply, ApplicationError> {
        if command.requires_collection() && !self.sessions.open_or_load(user, session).await {
            return Ok(BotReply::text(messages::NONE_OPEN).with_keyboard(ReplyKeyboard::open_menu()));
        }

        let reply = match command {
            BotCommand::Start => {
                self.sessions.clear(user, session).await?;
                BotReply::text(messages::START_MESSAGE).with_keyboard(ReplyKeyboard::open_menu())
            },
            BotCommand::Help => BotReply::text(messages::HELP_MESSAGE).with_keyboard(menu_for(session)),
            BotCommand::OpenFile => {
                self.sessions.clear(user, session).await?;
                BotReply::text(messages::SEND_FILE)
            },
            BotCommand::Filter => {
                session.set_state(ConversationState::AwaitingFilterField);
                BotReply::text(messages::CHOOSE_FILTER_FIELD)
                    .with_keyboard(ReplyKeyboard::filter_menu())
            },
            BotCommand::Sort => {
                session.set_state(ConversationState::AwaitingSortField);
                BotReply::text(messages::CHOOSE_SORT_FIELD).with_keyboard(ReplyKeyboard::sort_menu())
            },
            BotCommand::Export => {
                session.set_state(ConversationState::AwaitingExportFormat);
                BotReply::text(messages::CHOOSE_EXPORT_FORMAT)
                    .with_keyboard(ReplyKeyboard::export_menu())
            },
            BotCommand::View => {
                let trips = session
                    .collection()
                    .ok_or(ApplicationError::NoCollectionOpen)?;
                BotReply::text(trips.preview()).with_keyboard(ReplyKeyboard::main_menu())
            },
            BotCommand::Unknown { original_input } => {
                BotReply::text(ApplicationError::UnsupportedCommand(original_input).to_string())
                    .with_keyboard(menu_for(session))
            },
        };

        Ok(reply)
    }

    async fn export(
        &self,
        user: &UserId,
        session: &mut Session,
        text: &str,
    ) -> Result<BotReply, ApplicationError> {
        session.set_state(ConversationState::Default);

        let Some(format) = parse_export_format(text) else {
            return Ok(BotReply::text(messages::UNDEFINED_FORMAT).with_keyboard(menu_for(session)));
        };

        match self.sessions.export(user, session, format).await {
            Ok(document) => Ok(BotReply::text(messages::exporting(format))
                .with_keyboard(ReplyKeyboard::main_menu())
                .with_document(document)),
            Err(ApplicationError::NoCollectionOpen) => Err(ApplicationError::NoCollectionOpen),
            Err(e) => {
                error!(format = %format, error = %e, "Export error");
                Ok(BotReply::text(messages::EXPORT_FAILED).with_keyboard(ReplyKeyboard::main_menu()))
            },
        }
    }
}

fn choose_filter_field(session: &mut Session, text: &str) -> BotReply {
    let (state, prompt) = match FilterField::parse(text) {
        Some(FilterField::StationStart) => (
            ConversationState::AwaitingFilterValueStart,
            messages::ENTER_START_STATION,
        ),
        Some(FilterField::StationEnd) => (
            ConversationState::AwaitingFilterValueEnd,
            messages::ENTER_END_STATION,
        ),
        Some(FilterField::Both) => (
            ConversationState::AwaitingFilterValueBoth,
            messages::ENTER_BOTH_STATIONS,
        ),
        None => {
            session.set_state(ConversationState::Default);
            return BotReply::text(messages::UNDEFINED_FIELD).with_keyboard(menu_for(session));
        },
    };

    session.set_state(state);
    BotReply::text(prompt)
}

fn apply_filter(
    session: &mut Session,
    field: FilterField,
    value: &str,
) -> Result<BotReply, ApplicationError> {
    session.set_state(ConversationState::Default);

    let filter = TripFilter::single(field, value).ok_or_else(|| {
        ApplicationError::InvalidFilterInput(
            "two parameters must be given as value1&value2".to_string(),
        )
    })?;
    let filtered = session
        .collection()
        .ok_or(ApplicationError::NoCollectionOpen)?
        .filter(|trip| filter.matches(trip));

    let text = messages::filtered(&filtered.preview());
    info!(remaining = filtered.len(), "Collection filtered");
    session.replace_collection(filtered);
    Ok(BotReply::text(text).with_keyboard(ReplyKeyboard::main_menu()))
}

fn apply_sort(session: &mut Session, text: &str) -> Result<BotReply, ApplicationError> {
    session.set_state(ConversationState::Default);

    let Some(field) = SortField::parse(text) else {
        return Ok(BotReply::text(messages::UNDEFINED_FIELD).with_keyboard(menu_for(session)));
    };

    let trips = session
        .collection_mut()
        .ok_or(ApplicationError::NoCollectionOpen)?;
    trips.sort_by(|a, b| field.compare(a, b));
    info!(field = %field.field(), "Collection sorted");

    Ok(BotReply::text(messages::sorted(&trips.preview())).with_keyboard(ReplyKeyboard::main_menu()))
}

fn menu_for(session: &Session) -> ReplyKeyboard {
    if session.is_open() {
        ReplyKeyboard::main_menu()
    } else {
        ReplyKeyboard::open_menu()
    }
}

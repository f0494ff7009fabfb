//! Replies produced for the transport
//!
//! A reply is plain text plus an optional keyboard hint and an optional
//! exported document. How these are rendered is up to the transport.

use domain::{DataFormat, FilterField, SortField, UserId, export_format_label};
use serde::{Deserialize, Serialize};

/// Rows of button labels suggested for the user's next message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
}

impl ReplyKeyboard {
    /// Build a keyboard from rows of labels
    pub fn new<R, L>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Commands available while a file is open
    pub fn main_menu() -> Self {
        Self::new([vec!["Sort", "Filter", "View"], vec!["Export", "Open another"]])
    }

    /// Shown when no file is open
    pub fn open_menu() -> Self {
        Self::new([["Open file"]])
    }

    /// Choices for the filter field
    pub fn filter_menu() -> Self {
        Self::new([
            vec![
                FilterField::StationStart.label(),
                FilterField::StationEnd.label(),
            ],
            vec![FilterField::Both.label()],
        ])
    }

    /// Choices for the sort field
    pub fn sort_menu() -> Self {
        Self::new([[SortField::TimeStart.label(), SortField::TimeEnd.label()]])
    }

    /// Choices for the export format
    pub fn export_menu() -> Self {
        Self::new([[
            export_format_label(DataFormat::Json),
            export_format_label(DataFormat::Csv),
        ]])
    }
}

/// A serialized collection handed to the transport as a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Suggested file name, `<userId>.<ext>`
    pub file_name: String,
    /// Format of the content
    pub format: DataFormat,
    /// File content
    pub bytes: Vec<u8>,
}

impl ExportDocument {
    /// Create a document named after the user and format
    pub fn new(user: &UserId, format: DataFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{user}.{}", format.extension()),
            format,
            bytes,
        }
    }
}

/// Everything the transport needs to answer one incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    /// Message text (or document caption when `document` is set)
    pub text: String,
    /// Suggested keyboard for the next message
    pub keyboard: Option<ReplyKeyboard>,
    /// Exported document, if the message completed an export
    pub document: Option<ExportDocument>,
}

impl BotReply {
    /// A text-only reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            document: None,
        }
    }

    /// Attach a keyboard hint
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Attach an exported document
    #[must_use]
    pub fn with_document(mut self, document: ExportDocument) -> Self {
        self.document = Some(document);
        self
    }
}

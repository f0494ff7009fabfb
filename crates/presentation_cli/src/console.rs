//! Console transport for the conversation service
//!
//! Each input line is a text message for one user. `:upload <path>` sends a
//! file, `:quit` ends the session. Exported documents are saved under the
//! output directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use application::{BotReply, ConversationService, ExportDocument, ReplyKeyboard};
use domain::UserId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

const UPLOAD_PREFIX: &str = ":upload ";
const QUIT: &str = ":quit";

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput<'a> {
    /// Plain message text
    Text(&'a str),
    /// File upload from a local path
    Upload(&'a Path),
    /// End of session
    Quit,
}

impl<'a> ConsoleInput<'a> {
    /// Classify a raw input line
    pub fn parse(line: &'a str) -> Self {
        if line.trim() == QUIT {
            Self::Quit
        } else if let Some(path) = line.strip_prefix(UPLOAD_PREFIX) {
            Self::Upload(Path::new(path.trim()))
        } else {
            Self::Text(line)
        }
    }
}

/// Run the read-reply loop until `:quit` or end of input
pub async fn run<R, W>(
    service: &ConversationService,
    user: &UserId,
    output_dir: &Path,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match ConsoleInput::parse(&line) {
            ConsoleInput::Quit => break,
            ConsoleInput::Text(text) => service.handle_text(user, text).await,
            ConsoleInput::Upload(path) => match tokio::fs::read(path).await {
                Ok(bytes) => {
                    let name = path
                        .file_name()
                        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
                    service.handle_upload(user, &name, &bytes).await
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot read upload");
                    BotReply::text(format!("Cannot read {}: {e}", path.display()))
                },
            },
        };

        let saved = match &reply.document {
            Some(document) => Some(save_document(output_dir, document).await?),
            None => None,
        };
        output
            .write_all(render(&reply, saved.as_deref()).as_bytes())
            .await?;
        output.flush().await?;
    }
    Ok(())
}

async fn save_document(output_dir: &Path, document: &ExportDocument) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join(&document.file_name);
    tokio::fs::write(&path, &document.bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), size = document.bytes.len(), "Saved document");
    Ok(path)
}

/// Render a reply as console text
pub fn render(reply: &BotReply, saved: Option<&Path>) -> String {
    let mut out = String::new();
    out.push_str(reply.text.trim_end());
    out.push('\n');
    if let Some(path) = saved {
        out.push_str(&format!("[document saved to {}]\n", path.display()));
    }
    if let Some(keyboard) = &reply.keyboard {
        out.push_str(&render_keyboard(keyboard));
    }
    out.push('\n');
    out
}

fn render_keyboard(keyboard: &ReplyKeyboard) -> String {
    keyboard
        .rows
        .iter()
        .map(|row| {
            let buttons: Vec<String> = row.iter().map(|label| format!("[{label}]")).collect();
            format!("{}\n", buttons.join(" "))
        })
        .collect()
}

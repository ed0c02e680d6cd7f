//! Wraps teloxide::Bot and implements [`desk_core::Bot`]. Production code
//! sends through Telegram; tests substitute a recording Bot impl.

use std::path::Path;

use async_trait::async_trait;
use desk_core::{Bot as CoreBot, Chat, DeskError, Result};
use teloxide::{prelude::*, types::ChatId, types::InputFile};

/// Thin wrapper around teloxide::Bot implementing desk-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DeskError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()> {
        self.bot
            .send_document(ChatId(chat.id), InputFile::file(path.to_path_buf()))
            .caption(caption.to_string())
            .await
            .map_err(|e| DeskError::Bot(e.to_string()))?;
        Ok(())
    }
}

//! Bot abstraction for the outbound send surface.
//!
//! Transport-agnostic; the teloxide implementation lives in desk-telegram so
//! handlers and middleware can be tested against a recording fake.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Chat;

/// Outbound send operations the pipeline and handlers need from the
/// transport: plain text replies and document attachments.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a local file as a document attachment with a caption.
    async fn send_document(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()>;
}
